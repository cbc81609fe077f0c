use std::marker::PhantomData;
use std::sync::Arc;

use crate::common::AnnotatedMatch;
use crate::common::StandingsRow;
use crate::league;
use crate::league::standings::annotate_fixtures;
use crate::league::standings::compute_standings;

// NOTE: Country codes for the team names the flags API knows about; any
// other name resolves to no asset at all.
const COUNTRY_CODES: [(&str, &str); 4] = [
  ("Brazil", "BR"),
  ("Cameroon", "CM"),
  ("Serbia", "RS"),
  ("Switzerland", "CH"),
];

#[must_use]
pub struct DisplayableLeague {
  pub name: Arc<String>,
  pub fixtures: Vec<AnnotatedMatch>,
  pub standings: Vec<DisplayableRow>,
  constructor_guard: PhantomData<()>,
}

#[must_use]
pub struct DisplayableRow {
  pub row: StandingsRow,
  pub flag: String,
  constructor_guard: PhantomData<()>,
}

#[must_use]
pub fn flag_url(team: &str) -> String {
  COUNTRY_CODES
    .iter()
    .find(|(name, _)| *name == team)
    .map_or_else(String::new, |(_, code)| {
      format!("https://flagsapi.com/{}/flat/64.png", code)
    })
}

/// # Panics
#[must_use]
pub fn get_league() -> DisplayableLeague {
  let league = league::fetch_league();

  let standings = compute_standings(&league.matches)
    .into_iter()
    .map(|row| DisplayableRow {
      flag: flag_url(row.team.as_str()),
      row,
      constructor_guard: PhantomData,
    })
    .collect();

  DisplayableLeague {
    fixtures: annotate_fixtures(&league.matches, flag_url),
    name: league.name,
    standings,
    constructor_guard: PhantomData,
  }
}

pub(super) fn test() {
  assert_eq!(flag_url("Brazil"), "https://flagsapi.com/BR/flat/64.png");
  assert_eq!(flag_url("Serbia"), "https://flagsapi.com/RS/flat/64.png");
  assert_eq!(flag_url("Wakanda"), "");
}
