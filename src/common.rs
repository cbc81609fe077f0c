use std::collections::HashMap;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

pub type TeamId = Arc<String>;

#[must_use]
#[derive(Debug)]
pub struct League {
  pub name: Arc<String>,
  pub matches: Vec<Match>,
}
impl PartialEq for League {
  #[must_use]
  // NOTE(MUST-CHANGE-WHENEVER-STRUCT-FIELDS-CHANGE)
  fn eq(&self, other: &Self) -> bool {
    if !cfg!(test) {
      return self.name == other.name;
    }

    // NOTE(EXHAUSTIVE-EQUALITY-ONLY-FOR-TESTS)
    self.name == other.name && self.matches == other.matches
  }
}
impl Eq for League {}

// NOTE: `Match` can be constructed directly (no constructor-guard) because
// any combination of field values is accepted as input: sanitization is the
// supplier's concern.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Match {
  // NOTE: Opaque pass-through; never consulted by the standings computation.
  pub id: u64,
  pub date: DateTime<Utc>,
  pub stadium: Arc<String>,
  pub home_team: TeamId,
  pub away_team: TeamId,
  pub played: bool,
  // NOTE: Meaningful only when `played` is set.
  pub home_score: Option<usize>,
  pub away_score: Option<usize>,
}

#[must_use]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeadToHead {
  pub points: usize,
  pub goals_for: usize,
  pub goals_against: usize,
}

#[must_use]
#[derive(Clone, Debug)]
pub struct StandingsRow {
  pub team: TeamId,

  pub matches_played: usize,
  pub goals_for: usize,
  pub goals_against: usize,
  // NOTE: Derived from `goals_for` and `goals_against` on materialization,
  // never accumulated on its own.
  pub goal_difference: isize,
  pub points: usize,

  // NOTE: Keyed by opponent and consulted pairwise by the standings
  // comparator. Consumers are free to ignore it.
  pub head_to_head: HashMap<TeamId, HeadToHead>,
}
impl PartialEq for StandingsRow {
  #[must_use]
  // NOTE(MUST-CHANGE-WHENEVER-STRUCT-FIELDS-CHANGE)
  fn eq(&self, other: &Self) -> bool {
    if !cfg!(test) {
      return self.team == other.team;
    }

    // NOTE(EXHAUSTIVE-EQUALITY-ONLY-FOR-TESTS)
    self.team == other.team
      && self.matches_played == other.matches_played
      && self.goals_for == other.goals_for
      && self.goals_against == other.goals_against
      && self.goal_difference == other.goal_difference
      && self.points == other.points
      && self.head_to_head == other.head_to_head
  }
}
impl Eq for StandingsRow {}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnnotatedMatch {
  pub fixture: Match,
  pub home_team_flag: String,
  pub away_team_flag: String,
}
