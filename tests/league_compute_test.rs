//! Integration tests for row decoding and the display aggregations

use dynasty_ffl::{
    league::compute::{
        group_by_team, practice_squad_to_view, salary_to_view, series_record, standing_to_view,
        standings_tiers,
    },
    models::{StandingsTier, Winner},
    store::types::{PlayerSalaryRow, PracticeSquadRow, RivalryMatchupRow, StandingRow},
    Position, PositionFilter,
};
use serde_json::json;

#[test]
fn test_standings_rows_decode_and_tier() {
    let rows: Vec<StandingRow> = serde_json::from_value(json!([
        {"team_id": "a", "rank": 4, "points_accumulated": "12.5", "team": {"name": "A"}},
        {"team_id": "b", "rank": 5, "points_accumulated": null, "team": null},
        {"team_id": "c", "rank": 6, "team": {"name": "", "owner_name": ""}}
    ]))
    .unwrap();

    let standings: Vec<_> = rows.into_iter().map(standing_to_view).collect();
    assert_eq!(standings[0].total_points, 12.5);
    assert_eq!(standings[1].name, "Unknown Team");
    assert_eq!(standings[2].name, "Unknown Team");
    assert_eq!(standings[2].owner, "Unknown Owner");

    let tiers = standings_tiers(&standings);
    let ranks: Vec<(StandingsTier, Vec<u32>)> = tiers
        .into_iter()
        .map(|(tier, members)| (tier, members.iter().map(|s| s.rank).collect()))
        .collect();
    assert_eq!(
        ranks,
        vec![
            (StandingsTier::Playoffs, vec![4]),
            (StandingsTier::Purgatory, vec![5]),
            (StandingsTier::ToiletBowl, vec![6]),
        ]
    );
}

#[test]
fn test_matchup_scores_accept_strings_and_numbers() {
    let rows: Vec<RivalryMatchupRow> = serde_json::from_value(json!([
        {"id": "m1", "rivalry_id": "r1", "season": 2024,
         "team1_score": "120", "team2_score": "118", "winner": "team1"},
        {"id": "m2", "rivalry_id": "r1", "season": 2023,
         "team1_score": 120, "team2_score": 118, "winner": "team2"},
        {"id": "m3", "rivalry_id": "r1", "season": 2022,
         "team1_score": "forfeit", "team2_score": null, "winner": "tie"}
    ]))
    .unwrap();

    assert_eq!(rows[0].team1_score, rows[1].team1_score);
    assert_eq!(rows[0].team2_score, 118.0);
    assert!(rows[2].team1_score.is_nan());
    assert_eq!(rows[2].team2_score, 0.0);
    assert_eq!(rows[2].winner, Winner::Unknown);

    let views: Vec<_> = rows
        .into_iter()
        .map(dynasty_ffl::league::compute::matchup_to_view)
        .collect();
    let record = series_record(&views);
    assert_eq!((record.team1_wins, record.team2_wins), (1, 1));
}

#[test]
fn test_salary_rows_and_position_filter() {
    let rows: Vec<PlayerSalaryRow> = serde_json::from_value(json!([
        {"id": "c1", "player": {"first_name": "Josh", "last_name": "Allen", "position": "QB"},
         "team": null, "salary_2025": 45},
        {"id": "c2", "player": {"first_name": "Bijan", "last_name": "Robinson", "position": "RB"},
         "team": {"name": "Gridiron Gang"}, "franchise_tag": true}
    ]))
    .unwrap();

    let salaries: Vec<_> = rows.into_iter().map(salary_to_view).collect();
    assert_eq!(salaries[0].fantasy_team, "Free Agent");
    assert_eq!(salaries[0].salary_2025.as_deref(), Some("45"));

    let filter: PositionFilter = "rb".parse().unwrap();
    assert_eq!(filter, PositionFilter::Only(Position::RB));
    let running_backs = dynasty_ffl::league::compute::filter_by_position(&salaries, filter);
    assert_eq!(running_backs.len(), 1);
    assert!(running_backs[0].franchise_tag);
}

#[test]
fn test_practice_squad_grouping() {
    let rows: Vec<PracticeSquadRow> = serde_json::from_value(json!([
        {"id": "p1", "salary_2026": "$6", "players": {"full_name": "A", "position": "WR"},
         "teams": {"name": "Gridiron Gang"}},
        {"id": "p2", "salary_2025": "$1,000", "players": {"full_name": "B"},
         "teams": {"name": "Ladle Lords"}},
        {"id": "p3", "players": null, "teams": {"name": "Gridiron Gang"}}
    ]))
    .unwrap();

    let squads = group_by_team(rows.into_iter().map(practice_squad_to_view).collect());

    assert_eq!(squads.len(), 2);
    assert_eq!(squads[0].team_name, "Gridiron Gang");
    assert_eq!(squads[0].players.len(), 2);
    assert_eq!(squads[0].players[1].player_name, "Unknown");
    assert_eq!(squads[0].players[1].salary, "-");
    assert_eq!(squads[0].total_salary, 6);
    assert_eq!(squads[1].players[0].position, "-");
    assert_eq!(squads[1].total_salary, 1000);
}
