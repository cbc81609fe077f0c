use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::TimeZone;
use chrono::Utc;
use itertools::Itertools;

use crate::common::AnnotatedMatch;
use crate::common::HeadToHead;
use crate::common::Match;
use crate::common::StandingsRow;
use crate::common::TeamId;

const WIN_POINTS: usize = 3;
const DRAW_POINTS: usize = 1;

// NOTE: Local to a single `compute_standings()` pass; rebuilt from scratch on
// every invocation and discarded once the rows are materialized.
#[must_use]
#[derive(Default)]
struct TeamTally {
  matches_played: usize,
  goals_for: usize,
  goals_against: usize,
  points: usize,
  head_to_head: HashMap<TeamId, HeadToHead>,
}

/// # Panics
#[must_use]
pub fn compute_standings(matches: &[Match]) -> Vec<StandingsRow> {
  // NOTE: Unplayed matches still register both participants so a team
  // without a single played match surfaces in the table with zeroed stats.
  let mut tallies: HashMap<TeamId, TeamTally> = matches
    .iter()
    .flat_map(|m| vec![Arc::clone(&m.home_team), Arc::clone(&m.away_team)])
    .unique()
    .map(|team| (team, TeamTally::default()))
    .collect();

  for m in matches.iter().filter(|m| m.played) {
    // NOTE: A played match without both scores is a supplier bug.
    let home_score = m.home_score.unwrap();
    let away_score = m.away_score.unwrap();

    let (home_points, away_points) = match_points(home_score, away_score);

    accrue(
      tallies.get_mut(&m.home_team).unwrap(),
      &m.away_team,
      home_score,
      away_score,
      home_points,
    );
    accrue(
      tallies.get_mut(&m.away_team).unwrap(),
      &m.home_team,
      away_score,
      home_score,
      away_points,
    );
  }

  tallies
    .into_iter()
    .map(|(team, tally)| StandingsRow {
      team,
      matches_played: tally.matches_played,
      goals_for: tally.goals_for,
      goals_against: tally.goals_against,
      goal_difference: isize::try_from(tally.goals_for).unwrap()
        - isize::try_from(tally.goals_against).unwrap(),
      points: tally.points,
      head_to_head: tally.head_to_head,
    })
    .sorted_by(compare_rows)
    .collect()
}

#[must_use]
pub fn annotate_fixtures<F>(
  matches: &[Match],
  flag_resolver: F,
) -> Vec<AnnotatedMatch>
where
  F: Fn(&str) -> String,
{
  matches
    .iter()
    .map(|m| AnnotatedMatch {
      home_team_flag: flag_resolver(m.home_team.as_str()),
      away_team_flag: flag_resolver(m.away_team.as_str()),
      fixture: Match::clone(m),
    })
    .collect()
}

#[must_use]
const fn match_points(
  home_score: usize,
  away_score: usize,
) -> (usize, usize) {
  if home_score > away_score {
    (WIN_POINTS, 0)
  } else if home_score < away_score {
    (0, WIN_POINTS)
  } else {
    (DRAW_POINTS, DRAW_POINTS)
  }
}

fn accrue(
  tally: &mut TeamTally,
  opponent: &TeamId,
  goals_for: usize,
  goals_against: usize,
  points: usize,
) {
  tally.matches_played += 1;
  tally.goals_for += goals_for;
  tally.goals_against += goals_against;
  tally.points += points;

  // NOTE: Additive: a pair meeting more than once keeps one record
  // accumulated across all their matches, not the last match's.
  let record = tally
    .head_to_head
    .entry(Arc::clone(opponent))
    .or_insert_with(HeadToHead::default);
  record.points += points;
  record.goals_for += goals_for;
  record.goals_against += goals_against;
}

// NOTE: Not an `Ord` implementation: the head-to-head criterion is defined
// only between the two rows under comparison (and isn't transitive for
// cyclic results), so a row carries no self-contained total order.
#[must_use]
pub fn compare_rows(row1: &StandingsRow, row2: &StandingsRow) -> Ordering {
  let mut ordering = row2.points.cmp(&row1.points);
  if ordering != Ordering::Equal {
    return ordering;
  }

  // NOTE: Each side's points earned against the specific other team; teams
  // that never met compare 0-vs-0 and fall through.
  let head_to_head1 = row1
    .head_to_head
    .get(&row2.team)
    .map_or(0, |record| record.points);
  let head_to_head2 = row2
    .head_to_head
    .get(&row1.team)
    .map_or(0, |record| record.points);
  ordering = head_to_head2.cmp(&head_to_head1);
  if ordering != Ordering::Equal {
    return ordering;
  }

  ordering = row2.goal_difference.cmp(&row1.goal_difference);
  if ordering != Ordering::Equal {
    return ordering;
  }

  ordering = row2.goals_for.cmp(&row1.goals_for);
  if ordering != Ordering::Equal {
    return ordering;
  }

  row1.team.cmp(&row2.team)
}

#[must_use]
struct TestExample {
  matches: Vec<Match>,
  expected_standings: Vec<StandingsRow>,
}

#[allow(clippy::too_many_lines)]
pub(super) fn test() {
  #[cfg(test)]
  use pretty_assertions::assert_eq;

  let examples = vec![
    // NOTE: A win is worth 3 points and both goal columns accrue.
    TestExample {
      matches: vec![make_match(1, "brazil", "france", Some((2, 1)))],
      expected_standings: vec![
        make_row("brazil", 1, 2, 1, 3, vec![("france", (3, 2, 1))]),
        make_row("france", 1, 1, 2, 0, vec![("brazil", (0, 1, 2))]),
      ],
    },
    // NOTE: A draw is worth 1 point each.
    TestExample {
      matches: vec![make_match(1, "ajax", "breda", Some((1, 1)))],
      expected_standings: vec![
        make_row("ajax", 1, 1, 1, 1, vec![("breda", (1, 1, 1))]),
        make_row("breda", 1, 1, 1, 1, vec![("ajax", (1, 1, 1))]),
      ],
    },
    // NOTE: An unplayed match registers both participants with zeroed stats.
    TestExample {
      matches: vec![make_match(1, "ajax", "breda", None)],
      expected_standings: vec![
        make_row("ajax", 0, 0, 0, 0, vec![]),
        make_row("breda", 0, 0, 0, 0, vec![]),
      ],
    },
    TestExample {
      matches: vec![],
      expected_standings: vec![],
    },
    // NOTE: Head-to-head outranks both goal difference and name: quito has
    // the far better goal difference and the lexically earlier name, yet rio
    // won their meeting.
    TestExample {
      matches: vec![
        make_match(1, "rio", "quito", Some((1, 0))),
        make_match(2, "quito", "santos", Some((5, 0))),
      ],
      expected_standings: vec![
        make_row("rio", 1, 1, 0, 3, vec![("quito", (3, 1, 0))]),
        make_row(
          "quito",
          2,
          5,
          1,
          3,
          vec![("rio", (0, 0, 1)), ("santos", (3, 5, 0))],
        ),
        make_row("santos", 1, 0, 5, 0, vec![("quito", (0, 0, 5))]),
      ],
    },
    // NOTE: Three teams level on points with a transitive head-to-head
    // chain; the chain order is the reverse of the alphabetical one.
    TestExample {
      matches: make_three_way_tie_matches(),
      expected_standings: vec![
        make_row(
          "zwolle",
          2,
          4,
          0,
          6,
          vec![("meppel", (3, 1, 0)), ("aachen", (3, 3, 0))],
        ),
        make_row(
          "meppel",
          3,
          6,
          2,
          6,
          vec![
            ("zwolle", (0, 0, 1)),
            ("aachen", (3, 2, 1)),
            ("derby", (3, 4, 0)),
          ],
        ),
        make_row(
          "aachen",
          4,
          6,
          6,
          6,
          vec![
            ("zwolle", (0, 0, 3)),
            ("meppel", (0, 1, 2)),
            ("derby", (3, 2, 0)),
            ("essen", (3, 3, 1)),
          ],
        ),
        make_row(
          "derby",
          3,
          3,
          8,
          3,
          vec![
            ("meppel", (0, 0, 4)),
            ("aachen", (0, 0, 2)),
            ("essen", (3, 3, 2)),
          ],
        ),
        make_row(
          "essen",
          2,
          3,
          6,
          0,
          vec![("aachen", (0, 1, 3)), ("derby", (0, 2, 3))],
        ),
      ],
    },
    // NOTE: Equal points and drawn head-to-head; goal difference decides
    // against the alphabetical order.
    TestExample {
      matches: vec![
        make_match(1, "utrecht", "sneek", Some((2, 2))),
        make_match(2, "utrecht", "calais", Some((3, 0))),
        make_match(3, "sneek", "calais", Some((1, 0))),
      ],
      expected_standings: vec![
        make_row(
          "utrecht",
          2,
          5,
          2,
          4,
          vec![("sneek", (1, 2, 2)), ("calais", (3, 3, 0))],
        ),
        make_row(
          "sneek",
          2,
          3,
          2,
          4,
          vec![("utrecht", (1, 2, 2)), ("calais", (3, 1, 0))],
        ),
        make_row(
          "calais",
          2,
          0,
          4,
          0,
          vec![("utrecht", (0, 0, 3)), ("sneek", (0, 0, 1))],
        ),
      ],
    },
    // NOTE: Equal points, no meeting, equal goal difference; goals scored
    // decide against the alphabetical order.
    TestExample {
      matches: vec![
        make_match(1, "toulon", "calais", Some((3, 1))),
        make_match(2, "brest", "calais", Some((2, 0))),
      ],
      expected_standings: vec![
        make_row("toulon", 1, 3, 1, 3, vec![("calais", (3, 3, 1))]),
        make_row("brest", 1, 2, 0, 3, vec![("calais", (3, 2, 0))]),
        make_row(
          "calais",
          2,
          1,
          5,
          0,
          vec![("toulon", (0, 1, 3)), ("brest", (0, 0, 2))],
        ),
      ],
    },
    // NOTE: Identical on every other criterion; the lexically earlier name
    // ranks first.
    TestExample {
      matches: vec![make_match(1, "brazil", "argentina", Some((1, 1)))],
      expected_standings: vec![
        make_row("argentina", 1, 1, 1, 1, vec![("brazil", (1, 1, 1))]),
        make_row("brazil", 1, 1, 1, 1, vec![("argentina", (1, 1, 1))]),
      ],
    },
    // NOTE: A pair meeting twice keeps one accumulated head-to-head record.
    TestExample {
      matches: vec![
        make_match(1, "lyon", "metz", Some((2, 0))),
        make_match(2, "metz", "lyon", Some((1, 0))),
      ],
      expected_standings: vec![
        make_row("lyon", 2, 2, 1, 3, vec![("metz", (3, 2, 1))]),
        make_row("metz", 2, 1, 2, 3, vec![("lyon", (3, 1, 2))]),
      ],
    },
  ];

  for TestExample {
    matches,
    expected_standings,
  } in examples
  {
    assert_eq!(compute_standings(&matches), expected_standings);
  }

  // NOTE: The ranking must not depend on the order matches are supplied in.
  let matches = make_three_way_tie_matches();
  let baseline = compute_standings(&matches);
  let reversed: Vec<Match> = matches.iter().rev().map(Match::clone).collect();
  assert_eq!(compute_standings(&reversed), baseline);
  let mut rotated = reversed;
  rotated.rotate_left(3);
  assert_eq!(compute_standings(&rotated), baseline);

  // NOTE: Pairwise head-to-head can't rank a closed win cycle and the
  // remaining criteria are level too, so the cycle's internal order is
  // unspecified; the table must still contain each team exactly once with
  // the right totals.
  let cycle = compute_standings(&[
    make_match(1, "gouda", "haarlem", Some((1, 0))),
    make_match(2, "haarlem", "ieper", Some((1, 0))),
    make_match(3, "ieper", "gouda", Some((1, 0))),
  ]);
  assert_eq!(
    cycle
      .iter()
      .map(|row| (String::clone(&row.team), row.points, row.goal_difference))
      .sorted()
      .collect::<Vec<_>>(),
    vec![("gouda", 3, 0), ("haarlem", 3, 0), ("ieper", 3, 0)]
      .into_iter()
      .map(|(team, points, goal_difference)| {
        (team.to_string(), points, goal_difference)
      })
      .collect::<Vec<_>>(),
  );

  // NOTE: Annotation is a pass-through decoration with an injected resolver.
  assert_eq!(
    annotate_fixtures(&[make_match(1, "gouda", "haarlem", None)], |team| {
      format!("flag-of-{}", team)
    }),
    vec![AnnotatedMatch {
      fixture: make_match(1, "gouda", "haarlem", None),
      home_team_flag: "flag-of-gouda".to_string(),
      away_team_flag: "flag-of-haarlem".to_string(),
    }],
  );
}

fn make_three_way_tie_matches() -> Vec<Match> {
  vec![
    make_match(1, "zwolle", "meppel", Some((1, 0))),
    make_match(2, "zwolle", "aachen", Some((3, 0))),
    make_match(3, "meppel", "aachen", Some((2, 1))),
    make_match(4, "meppel", "derby", Some((4, 0))),
    make_match(5, "aachen", "derby", Some((2, 0))),
    make_match(6, "aachen", "essen", Some((3, 1))),
    make_match(7, "derby", "essen", Some((3, 2))),
  ]
}

fn make_match(
  id: u64,
  home_team: &str,
  away_team: &str,
  scores: Option<(usize, usize)>,
) -> Match {
  Match {
    id,
    date: Utc.timestamp_millis_opt(1_668_866_400_000).unwrap(),
    stadium: Arc::new("dummy-stadium".to_string()),
    home_team: Arc::new(home_team.to_string()),
    away_team: Arc::new(away_team.to_string()),
    played: scores.is_some(),
    home_score: scores.map(|(home_score, _)| home_score),
    away_score: scores.map(|(_, away_score)| away_score),
  }
}

fn make_row(
  team: &str,
  matches_played: usize,
  goals_for: usize,
  goals_against: usize,
  points: usize,
  head_to_head: Vec<(&str, (usize, usize, usize))>,
) -> StandingsRow {
  StandingsRow {
    team: Arc::new(team.to_string()),
    matches_played,
    goals_for,
    goals_against,
    goal_difference: isize::try_from(goals_for).unwrap()
      - isize::try_from(goals_against).unwrap(),
    points,
    head_to_head: head_to_head
      .into_iter()
      .map(|(opponent, (points, goals_for, goals_against))| {
        (
          Arc::new(opponent.to_string()),
          HeadToHead {
            points,
            goals_for,
            goals_against,
          },
        )
      })
      .collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::test;

  #[test]
  fn test_league_standings() {
    test()
  }
}
