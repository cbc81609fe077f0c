fn main() {
  zebu::test();

  let league = zebu::league_ambassador::get_league();

  // SEE: https://doc.rust-lang.org/std/fmt/#fillalignment
  println!("|{:-^94}|", "");
  println!("|{:^94}|", format!("{} - Schedule", league.name));
  println!("|{:-^94}|", "");
  println!(
    "| {date:16} | {stadium:25} | {home:15} | {score:7} | {away:15} |",
    date = "Date",
    stadium = "Stadium",
    home = "Home",
    score = "Score",
    away = "Away",
  );
  println!("|{:-^94}|", "");

  for annotated in &league.fixtures {
    let fixture = &annotated.fixture;
    let score = if fixture.played {
      format!(
        "{} - {}",
        fixture.home_score.unwrap(),
        fixture.away_score.unwrap(),
      )
    } else {
      "-".to_string()
    };

    println!(
      "| {date:16} | {stadium:25} | {home:15} | {score:7} | {away:15} |",
      date = fixture.date.format("%Y-%m-%d %H:%M").to_string(),
      stadium = fixture.stadium,
      home = fixture.home_team,
      score = score,
      away = fixture.away_team,
    );
  }

  println!();
  println!("|{:-^81}|", "");
  println!("|{:^81}|", format!("{} - Standings", league.name));
  println!("|{:-^81}|", "");
  println!(
    "| {position:4} | {team:25} | {matches_played:7} | {goals_for:5} | {goals_against:7} | {goal_difference:5} | {points:6} |",
    position = "Pos",
    team = "Team",
    matches_played = "Played",
    goals_for = "GF",
    goals_against = "GA",
    goal_difference = "GD",
    points = "Points",
  );
  println!("|{:-^81}|", "");

  for (position, standing) in league.standings.iter().enumerate() {
    println!(
      "| {position:4} | {team:25} | {matches_played:7} | {goals_for:5} | {goals_against:7} | {goal_difference:5} | {points:6} |",
      position = position + 1,
      team = standing.row.team,
      matches_played = standing.row.matches_played,
      goals_for = standing.row.goals_for,
      goals_against = standing.row.goals_against,
      goal_difference = standing.row.goal_difference,
      points = standing.row.points,
    );
  }
}
