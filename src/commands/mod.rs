//! Command implementations for the dynasty league CLI

pub mod common;
pub mod league_data;
pub mod rivalries;
pub mod salaries;
pub mod standings;
