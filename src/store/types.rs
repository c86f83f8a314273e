//! Row shapes returned by the league store.
//!
//! Field names match the store's column names exactly. Nullable columns and
//! joined relations are `Option`s; defaulting happens in the league mappers,
//! not here.

use serde::{Deserialize, Deserializer, Serialize};


/// A JSON scalar the store may send for a numeric or text column.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Num(f64),
    Text(String),
}

/// Numeric coercion: numbers pass through, numeric strings are parsed,
/// blank strings are zero and anything else is NaN.
fn coerce_number(value: Scalar) -> f64 {
    match value {
        Scalar::Num(n) => n,
        Scalar::Bool(b) => f64::from(u8::from(b)),
        Scalar::Text(s) => {
            let t = s.trim();
            if t.is_empty() {
                0.0
            } else {
                t.parse().unwrap_or(f64::NAN)
            }
        }
    }
}

/// Deserialize a number that may arrive as a JSON number or numeric string.
/// `null` coerces to zero.
pub fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(coerce_number)
        .unwrap_or(0.0))
}

/// Like [`de_number`] but keeps `null` as `None`.
pub fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(coerce_number))
}

/// Text column that some rows store as a number (draft rounds, salaries).
pub fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Scalar>::deserialize(deserializer)?.map(|value| match value {
            Scalar::Text(s) => s,
            Scalar::Num(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }),
    )
}

/// `null` becomes the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `teams` row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

/// `seasons` row.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Season {
    pub id: String,
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// `regular_season_standings` row with its `team:teams(*)` relation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingRow {
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub points_accumulated: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub total_points_for: Option<f64>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub average_ppw: Option<f64>,
    #[serde(default)]
    pub team: Option<Team>,
}

/// `playoff_outcomes` row with its `team:teams(*)` relation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayoffOutcomeRow {
    pub id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub semifinal_score: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub finals_score: Option<f64>,
    #[serde(default)]
    pub is_finalist: Option<bool>,
    #[serde(default)]
    pub team: Option<Team>,
}

/// `players` row, or the subset of it a query selects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// `player_salaries` row with `player:players(*)` and `team:teams(*)`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSalaryRow {
    pub id: String,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub franchise_tag: Option<bool>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub rookie_draft_round: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub salary_2025: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub salary_2026: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub salary_2027: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub salary_2028: Option<String>,
    #[serde(default)]
    pub practice_squad: Option<bool>,
    #[serde(default)]
    pub player: Option<PlayerRow>,
    #[serde(default)]
    pub team: Option<Team>,
}

/// Practice-squad projection of `player_salaries`: the relations come back
/// under their table names (`players`, `teams`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PracticeSquadRow {
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub salary_2025: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub salary_2026: Option<String>,
    #[serde(default)]
    pub players: Option<PlayerRow>,
    #[serde(default)]
    pub teams: Option<Team>,
}

/// `rivalries` row.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RivalryRow {
    pub id: String,
    pub game_name: String,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub trophy_name: Option<String>,
    pub team1_governor: String,
    pub team2_governor: String,
    #[serde(default)]
    pub origin_story: Option<Vec<String>>,
}

/// Which side of a rivalry won a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Team1,
    Team2,
    /// Any value the store holds besides `team1`/`team2`.
    #[serde(other)]
    Unknown,
}

/// `rivalry_matchups` row. Scores may be stored as numeric strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RivalryMatchupRow {
    pub id: String,
    pub rivalry_id: String,
    pub season: i32,
    #[serde(deserialize_with = "de_number")]
    pub team1_score: f64,
    #[serde(deserialize_with = "de_number")]
    pub team2_score: f64,
    pub winner: Winner,
}
