//! League data as the pages see it
//!
//! - `hooks`: cached async queries (`LeagueData`)
//! - `compute`: row mapping and display aggregations
//! - `models`: view-models
//! - `governors`: rivalry governor short names

pub mod compute;
pub mod governors;
pub mod hooks;
pub mod models;

pub use hooks::LeagueData;
pub use models::{
    PlayerSalaryWithDetails, PlayoffOutcome, PracticeSquadPlayer, Rivalry, RivalryMatchup,
    SeriesRecord, StandingsTier, TeamSquad, TeamWithStandings, Winner,
};
