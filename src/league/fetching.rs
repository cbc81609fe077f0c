mod common;

use std::sync::Arc;

use chrono::TimeZone;
use chrono::Utc;

use crate::common::League;
use crate::common::Match;
use crate::league::fetching::common::LeagueProvider;

struct LeagueManager {}
impl LeagueProvider for LeagueManager {
  const LEAGUE_NAME: &'static str = "World Cup Group G";
  const TEST_DATA_FILE_ID: &'static str = "2023-05-21T09:14:33";
  const TEST_DATA_PREFIX: &'static str = "league-manager";

  fn download_league() -> Vec<String> {
    use reqwest::blocking::Client;
    use reqwest::header::AUTHORIZATION;
    use serde::Deserialize;

    // NOTE: Used to match exactly the URL used by the official web UI.
    const API_URL: &str = "http://localhost:3001/api/v1";

    #[derive(Deserialize)]
    struct AccessTokenResponse {
      access_token: String,
    }

    // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.ClientBuilder.html
    let client = Client::builder()
      .user_agent("zebu/0.1.0")
      .gzip(true)
      .deflate(true)
      .brotli(true)
      .build()
      .unwrap();

    // NOTE: `getAllMatches` refuses requests without a fresh bearer token.
    let token_response = client
      .get(format!("{}/getAccessToken", API_URL))
      .send()
      .unwrap()
      .text()
      .unwrap();
    let AccessTokenResponse { access_token } =
      serde_json::from_str(&token_response).unwrap();

    let matches_response = client
      .get(format!("{}/getAllMatches", API_URL))
      .header(AUTHORIZATION, format!("Bearer {}", access_token))
      .send()
      .unwrap()
      .text()
      .unwrap();

    vec![matches_response]
  }

  fn process_league(responses: Vec<String>) -> Vec<Match> {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct MatchesResponse {
      matches: Vec<MatchItem>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct MatchItem {
      id: u64,
      // NOTE: Epoch milliseconds on the wire.
      match_date: i64,
      stadium: String,
      home_team: String,
      away_team: String,
      match_played: bool,
      // NOTE: Absent (or null) until the match is played.
      #[serde(default)]
      home_team_score: Option<usize>,
      #[serde(default)]
      away_team_score: Option<usize>,
    }

    responses
      .into_iter()
      .flat_map(|response| {
        let MatchesResponse { matches } =
          serde_json::from_str(&response).unwrap();

        matches
          .into_iter()
          .map(|item| Match {
            id: item.id,
            date: Utc.timestamp_millis_opt(item.match_date).unwrap(),
            stadium: Arc::new(item.stadium),
            home_team: Arc::new(item.home_team),
            away_team: Arc::new(item.away_team),
            played: item.match_played,
            home_score: item.home_team_score,
            away_score: item.away_team_score,
          })
          .collect::<Vec<_>>()
      })
      .collect()
  }
}

/// # Panics
#[must_use]
pub(super) fn fetch_league() -> League {
  LeagueManager::fetch_league()
}

pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  assert_eq!(
    LeagueManager::test_fetch_league(),
    League {
      name: Arc::new("World Cup Group G".to_string()),
      matches: vec![
        (
          1,
          1_668_866_400_000,
          "Al Janoub Stadium",
          ("Switzerland", "Cameroon"),
          Some((1, 0)),
        ),
        (
          2,
          1_668_952_800_000,
          "Lusail Stadium",
          ("Brazil", "Serbia"),
          Some((2, 0)),
        ),
        (
          3,
          1_669_384_800_000,
          "Al Janoub Stadium",
          ("Cameroon", "Serbia"),
          Some((3, 3)),
        ),
        (
          4,
          1_669_471_200_000,
          "Stadium 974",
          ("Brazil", "Switzerland"),
          Some((1, 0)),
        ),
        (
          5,
          1_669_903_200_000,
          "Stadium 974",
          ("Serbia", "Switzerland"),
          None,
        ),
        (
          6,
          1_669_903_200_000,
          "Lusail Stadium",
          ("Cameroon", "Brazil"),
          None,
        ),
      ]
      .into_iter()
      .map(|(id, date, stadium, (home_team, away_team), scores)| Match {
        id,
        date: Utc.timestamp_millis_opt(date).unwrap(),
        stadium: Arc::new(stadium.to_string()),
        home_team: Arc::new(home_team.to_string()),
        away_team: Arc::new(away_team.to_string()),
        played: scores.is_some(),
        home_score: scores.map(|(home_score, _)| home_score),
        away_score: scores.map(|(_, away_score)| away_score),
      })
      .collect(),
    }
  );
}

#[cfg(test)]
mod tests {
  use super::test;

  #[test]
  fn test_league_fetching() {
    test()
  }
}
