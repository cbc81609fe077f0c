use std::string;
use std::sync::Arc;

use crate::common::League;
use crate::common::Match;

pub(super) trait LeagueProvider {
  const LEAGUE_NAME: &'static str;
  const TEST_DATA_FILE_ID: &'static str;
  const TEST_DATA_PREFIX: &'static str;

  // NOTE: `download_league()` and `process_league()` only separated for
  // easier testing.
  fn download_league() -> Vec<String>;
  fn process_league(responses: Vec<String>) -> Vec<Match>;

  #[must_use]
  fn fetch_league() -> League {
    League {
      name: Arc::new(Self::LEAGUE_NAME.to_string()),
      matches: Self::process_league(Self::download_league()),
    }
  }

  #[must_use]
  fn test_fetch_league() -> League {
    League {
      name: Arc::new(Self::LEAGUE_NAME.to_string()),
      matches: Self::process_league(Self::test_helper_download_league()),
    }
  }

  // NOTE: Captures the live responses into `data/` so the fetching tests can
  // run against them offline; invoked manually whenever the capture needs
  // refreshing (then point `TEST_DATA_FILE_ID` at the new file).
  fn test_helper_generate_downloaded_league() {
    use std::fs::File;
    use std::io::Write;

    use chrono::prelude::Utc;

    let responses = Self::download_league();
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();

    let mut f =
      File::create(format!("data/{}-{}", Self::TEST_DATA_PREFIX, timestamp))
        .expect("creating test data file failed");
    for response in &responses {
      f.write_all(response.as_bytes()).expect("write failed");
      f.write_all(b"\n").expect("newline write failed");
    }
  }

  fn test_helper_download_league() -> Vec<String> {
    use std::fs;

    fs::read_to_string(format!(
      "data/{}-{}",
      Self::TEST_DATA_PREFIX,
      Self::TEST_DATA_FILE_ID,
    ))
    .expect("reading test data failed")
    .lines()
    .map(string::ToString::to_string)
    .collect()
  }
}
