mod fetching;
pub mod standings;

use crate::common::League;

/// # Panics
#[must_use]
pub fn fetch_league() -> League {
  fetching::fetch_league()
}

pub(super) fn test() {
  fetching::test();
  standings::test();
}
