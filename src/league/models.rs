//! View-models handed to the pages.

use serde::{Deserialize, Serialize};

pub use crate::store::types::Winner;

/// One team's regular-season standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWithStandings {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub rank: u32,
    pub total_points: f64,
    pub points_for: f64,
    pub wins: u32,
    pub losses: u32,
    pub avg_ppw: f64,
}

/// One team's playoff result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffOutcome {
    pub id: String,
    pub team_id: String,
    pub team_name: String,
    pub owner_name: String,
    pub rank: u32,
    pub semifinal_score: Option<f64>,
    pub is_finalist: bool,
    pub finals_score: Option<f64>,
}

/// Flat row of the salary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSalaryWithDetails {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub fantasy_team: String,
    pub franchise_tag: bool,
    pub rookie_draft_round: Option<String>,
    pub salary_2025: Option<String>,
    pub salary_2026: Option<String>,
    pub salary_2027: Option<String>,
    pub salary_2028: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSquadPlayer {
    pub id: String,
    pub player_name: String,
    pub position: String,
    pub team_name: String,
    pub salary: String,
}

/// Practice squad players of one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSquad {
    pub team_name: String,
    pub players: Vec<PracticeSquadPlayer>,
    pub total_salary: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RivalryMatchup {
    pub id: String,
    pub rivalry_id: String,
    pub season: i32,
    pub team1_score: f64,
    pub team2_score: f64,
    pub winner: Winner,
}

/// A rivalry game with its governors resolved to current team names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rivalry {
    pub id: String,
    pub game_name: String,
    pub slogan: Option<String>,
    pub trophy_name: Option<String>,
    pub team1_governor: String,
    pub team2_governor: String,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub origin_story: Option<Vec<String>>,
    /// Newest season first.
    pub matchups: Vec<RivalryMatchup>,
}

/// Head-to-head record of a rivalry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub team1_wins: u32,
    pub team2_wins: u32,
}

/// Display tier of a regular-season standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandingsTier {
    Playoffs,
    Purgatory,
    ToiletBowl,
}

impl StandingsTier {
    pub const ALL: [StandingsTier; 3] = [
        StandingsTier::Playoffs,
        StandingsTier::Purgatory,
        StandingsTier::ToiletBowl,
    ];

    /// Ranks 1-4 make the playoffs, 5 sits in purgatory, 6 and below play
    /// the toilet bowl.
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            0..=4 => StandingsTier::Playoffs,
            5 => StandingsTier::Purgatory,
            _ => StandingsTier::ToiletBowl,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StandingsTier::Playoffs => "If Playoffs Started Tomorrow",
            StandingsTier::Purgatory => "Purgatory",
            StandingsTier::ToiletBowl => "The Toilet Bowl",
        }
    }

    pub fn caption(&self) -> Option<&'static str> {
        match self {
            StandingsTier::Purgatory => Some("Neither rewarded nor condemned"),
            _ => None,
        }
    }
}
