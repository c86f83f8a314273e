//! Type-safe wrappers and enums for league data.

pub mod ids;
pub mod position;

pub use ids::SeasonId;
pub use position::{Position, PositionFilter};
