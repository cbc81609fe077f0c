pub mod common;
pub mod league;
pub mod league_ambassador;

use std::boxed::Box;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

pub fn test() {
  league::test();
  league_ambassador::test();
}

#[repr(C)]
#[must_use]
pub struct StandingsRowNative {
  team: *const c_char,
  matches_played: u64,
  goals_for: u64,
  goals_against: u64,
  goal_difference: i64,
  points: u64,
}

#[no_mangle]
pub extern "C" fn test_native() {
  test();
}

/// # Panics
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[must_use]
#[no_mangle]
pub extern "C" fn get_league_standings_native(
  standings_rows_count: *mut u64,
  standings_rows: *mut *const StandingsRowNative,
) -> i32 {
  let league = league::fetch_league();
  let local_standings_rows =
    league::standings::compute_standings(&league.matches);

  let rows = Box::into_raw(
    (&local_standings_rows)
      .iter()
      .map(|row| StandingsRowNative {
        team: CString::new(String::clone(&row.team)).unwrap().into_raw(),
        matches_played: row.matches_played as u64,
        goals_for: row.goals_for as u64,
        goals_against: row.goals_against as u64,
        goal_difference: row.goal_difference as i64,
        points: row.points as u64,
      })
      .collect::<Vec<_>>()
      .into_boxed_slice(),
  ) as *const StandingsRowNative;

  unsafe {
    *standings_rows_count = local_standings_rows.len() as u64;
    // NOTE: We have to use `NULL` when an array is empty as otherwise
    // deallocation would fail with a misaligned pointer on Android x86_64
    // (and probably any Linux system). This is to be expected as it might be
    // considered an empty allocation (which has some subtleties).
    *standings_rows = if *standings_rows_count == 0 {
      ptr::null()
    } else {
      rows
    };
  }

  0
}

/// # Panics
#[allow(clippy::not_unsafe_ptr_arg_deref, unused_must_use)]
#[no_mangle]
pub extern "C" fn get_league_standings_native_free(
  standings_rows: *mut *const StandingsRowNative,
) {
  unsafe {
    if (*standings_rows).is_null() {
      return;
    }

    Box::from_raw(*standings_rows as *mut StandingsRowNative);
    *standings_rows = ptr::null();
  }
}
