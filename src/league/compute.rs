//! Row -> view-model mapping and the display aggregations built on top.
//!
//! Everything here is pure. Missing or empty values resolve to fixed
//! defaults; nothing is validated beyond that.

use std::collections::HashMap;

use tracing::warn;

use super::governors::owner_for_governor;
use super::models::{
    PlayerSalaryWithDetails, PlayoffOutcome, PracticeSquadPlayer, Rivalry, RivalryMatchup,
    SeriesRecord, StandingsTier, TeamSquad, TeamWithStandings, Winner,
};
use crate::cli::types::PositionFilter;
use crate::store::types::{
    PlayerSalaryRow, PlayoffOutcomeRow, PracticeSquadRow, RivalryMatchupRow, RivalryRow,
    StandingRow, Team,
};


pub const UNKNOWN_TEAM: &str = "Unknown Team";
pub const UNKNOWN_OWNER: &str = "Unknown Owner";
pub const FREE_AGENT: &str = "Free Agent";
pub const UNKNOWN_PLAYER: &str = "Unknown";
pub const NO_VALUE: &str = "-";

/// Owner name -> team name.
pub type OwnerIndex = HashMap<String, String>;

/// Empty strings count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn present_ref(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Zero-valued numbers and NaN count as missing, like a falsy check.
fn number_or_zero(value: Option<f64>) -> f64 {
    value.filter(|n| !n.is_nan()).unwrap_or(0.0)
}

fn team_name_or(team: &Option<Team>, fallback: &str) -> String {
    team.as_ref()
        .and_then(|t| present_ref(&t.name))
        .unwrap_or(fallback)
        .to_string()
}

fn owner_name_or_unknown(team: &Option<Team>) -> String {
    team.as_ref()
        .and_then(|t| present_ref(&t.owner_name))
        .unwrap_or(UNKNOWN_OWNER)
        .to_string()
}

/// Map a standings row. The joined team's id wins over the row's `team_id`.
pub fn standing_to_view(row: StandingRow) -> TeamWithStandings {
    let id = row
        .team
        .as_ref()
        .and_then(|t| present(t.id.clone()))
        .or_else(|| row.team_id.clone())
        .unwrap_or_default();

    TeamWithStandings {
        id,
        name: team_name_or(&row.team, UNKNOWN_TEAM),
        owner: owner_name_or_unknown(&row.team),
        rank: row.rank.unwrap_or(0),
        total_points: number_or_zero(row.points_accumulated),
        points_for: number_or_zero(row.total_points_for),
        wins: row.wins.unwrap_or(0),
        losses: row.losses.unwrap_or(0),
        avg_ppw: number_or_zero(row.average_ppw),
    }
}

pub fn outcome_to_view(row: PlayoffOutcomeRow) -> PlayoffOutcome {
    PlayoffOutcome {
        team_name: team_name_or(&row.team, UNKNOWN_TEAM),
        owner_name: owner_name_or_unknown(&row.team),
        id: row.id,
        team_id: row.team_id.unwrap_or_default(),
        rank: row.rank.unwrap_or(0),
        semifinal_score: row.semifinal_score,
        is_finalist: row.is_finalist.unwrap_or(false),
        finals_score: row.finals_score,
    }
}

pub fn salary_to_view(row: PlayerSalaryRow) -> PlayerSalaryWithDetails {
    let player = row.player.unwrap_or_default();

    PlayerSalaryWithDetails {
        id: row.id,
        first_name: player.first_name.unwrap_or_default(),
        last_name: player.last_name.unwrap_or_default(),
        position: player.position.unwrap_or_default(),
        fantasy_team: team_name_or(&row.team, FREE_AGENT),
        franchise_tag: row.franchise_tag.unwrap_or(false),
        rookie_draft_round: present(row.rookie_draft_round),
        salary_2025: present(row.salary_2025),
        salary_2026: present(row.salary_2026),
        salary_2027: present(row.salary_2027),
        salary_2028: present(row.salary_2028),
    }
}

/// Practice squad row; the displayed salary is 2026's, else 2025's.
pub fn practice_squad_to_view(row: PracticeSquadRow) -> PracticeSquadPlayer {
    let player_name = row
        .players
        .as_ref()
        .and_then(|p| present_ref(&p.full_name))
        .unwrap_or(UNKNOWN_PLAYER)
        .to_string();
    let position = row
        .players
        .as_ref()
        .and_then(|p| present_ref(&p.position))
        .unwrap_or(NO_VALUE)
        .to_string();

    PracticeSquadPlayer {
        team_name: team_name_or(&row.teams, FREE_AGENT),
        salary: present(row.salary_2026)
            .or_else(|| present(row.salary_2025))
            .unwrap_or_else(|| NO_VALUE.to_string()),
        id: row.id,
        player_name,
        position,
    }
}

pub fn matchup_to_view(row: RivalryMatchupRow) -> RivalryMatchup {
    RivalryMatchup {
        id: row.id,
        rivalry_id: row.rivalry_id,
        season: row.season,
        team1_score: row.team1_score,
        team2_score: row.team2_score,
        winner: row.winner,
    }
}

/// Owner name -> team name, skipping teams without an owner. Later teams
/// win on duplicate owners.
pub fn owner_index(teams: &[Team]) -> OwnerIndex {
    teams
        .iter()
        .filter_map(|team| {
            let owner = present_ref(&team.owner_name)?;
            Some((owner.to_string(), team.name.clone().unwrap_or_default()))
        })
        .collect()
}

/// Team name for a governor short name.
///
/// A governor listed in the short-name table resolves only through its full
/// owner name; any other name is looked up as an owner name directly.
pub fn resolve_governor_team(governor: &str, owners: &OwnerIndex) -> Option<String> {
    let owner = owner_for_governor(governor).unwrap_or(governor);
    owners.get(owner).filter(|name| !name.is_empty()).cloned()
}

/// Attach matchups and resolved team names to each rivalry. Matchup order
/// is kept as given.
pub fn assemble_rivalries(
    rivalries: Vec<RivalryRow>,
    matchups: Vec<RivalryMatchupRow>,
    teams: &[Team],
) -> Vec<Rivalry> {
    let owners = owner_index(teams);

    let mut by_rivalry: HashMap<String, Vec<RivalryMatchup>> = HashMap::new();
    for row in matchups {
        by_rivalry
            .entry(row.rivalry_id.clone())
            .or_default()
            .push(matchup_to_view(row));
    }

    rivalries
        .into_iter()
        .map(|rivalry| {
            let team1_name = resolve_governor_team(&rivalry.team1_governor, &owners);
            let team2_name = resolve_governor_team(&rivalry.team2_governor, &owners);
            for (governor, name) in [
                (&rivalry.team1_governor, &team1_name),
                (&rivalry.team2_governor, &team2_name),
            ] {
                if name.is_none() {
                    warn!(rivalry = %rivalry.game_name, governor = %governor, "governor has no team");
                }
            }

            Rivalry {
                matchups: by_rivalry.get(&rivalry.id).cloned().unwrap_or_default(),
                id: rivalry.id,
                game_name: rivalry.game_name,
                slogan: rivalry.slogan,
                trophy_name: rivalry.trophy_name,
                team1_governor: rivalry.team1_governor,
                team2_governor: rivalry.team2_governor,
                team1_name,
                team2_name,
                origin_story: rivalry.origin_story,
            }
        })
        .collect()
}

pub fn series_record(matchups: &[RivalryMatchup]) -> SeriesRecord {
    matchups
        .iter()
        .fold(SeriesRecord::default(), |mut record, m| {
            match m.winner {
                Winner::Team1 => record.team1_wins += 1,
                Winner::Team2 => record.team2_wins += 1,
                Winner::Unknown => {}
            }
            record
        })
}

/// Standings split into display tiers, each keeping rank order. Empty tiers
/// are included.
pub fn standings_tiers(
    standings: &[TeamWithStandings],
) -> Vec<(StandingsTier, Vec<&TeamWithStandings>)> {
    StandingsTier::ALL
        .iter()
        .map(|tier| {
            let members = standings
                .iter()
                .filter(|s| StandingsTier::for_rank(s.rank) == *tier)
                .collect();
            (*tier, members)
        })
        .collect()
}

pub fn filter_by_position(
    players: &[PlayerSalaryWithDetails],
    filter: PositionFilter,
) -> Vec<&PlayerSalaryWithDetails> {
    players
        .iter()
        .filter(|p| filter.matches(&p.position))
        .collect()
}

/// Digits of a salary string as a whole number: `"$1,250"` is 1250, and a
/// string without digits is 0. Saturates at `u64::MAX`.
pub fn parse_salary(salary: &str) -> u64 {
    salary
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// Sum of parsed salaries, saturating at `u64::MAX`.
pub fn total_salary(players: &[PracticeSquadPlayer]) -> u64 {
    players
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(parse_salary(&p.salary)))
}

/// Group players by team name, teams in order of first appearance.
pub fn group_by_team(players: Vec<PracticeSquadPlayer>) -> Vec<TeamSquad> {
    let mut squads: Vec<TeamSquad> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for player in players {
        match positions.get(&player.team_name) {
            Some(&i) => squads[i].players.push(player),
            None => {
                positions.insert(player.team_name.clone(), squads.len());
                squads.push(TeamSquad {
                    team_name: player.team_name.clone(),
                    players: vec![player],
                    total_salary: 0,
                });
            }
        }
    }

    for squad in &mut squads {
        squad.total_salary = total_salary(&squad.players);
    }
    squads
}
