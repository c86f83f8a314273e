//! Dynasty Fantasy Football League Client Library
//!
//! Read-only access to a dynasty league's hosted database: teams, seasons,
//! regular-season standings, playoff outcomes, player salaries, the practice
//! squad and rivalry games.
//!
//! ## Features
//!
//! - **Store Client**: PostgREST reads with nested relation selects
//! - **League Queries**: one cached async method per dataset
//! - **View-Models**: null-safe mapping with fixed display defaults
//! - **Query Cache**: in-memory LRU backed by JSON files on disk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dynasty_ffl::{
//!     core::{StoreConfig, UnifiedCache},
//!     store::StoreClient,
//!     LeagueData,
//! };
//!
//! # async fn example() -> dynasty_ffl::Result<()> {
//! let config = StoreConfig::resolve(None, None)?;
//! let league = LeagueData::new(StoreClient::new(&config)?, UnifiedCache::in_memory(16));
//!
//! for standing in league.active_season_standings().await? {
//!     println!("{}. {}", standing.rank, standing.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the store location and key to avoid passing them in every command:
//! ```bash
//! export DYNASTY_FFL_STORE_URL=https://your-project.supabase.co
//! export DYNASTY_FFL_API_KEY=your-anon-key
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod store;

// Re-export commonly used types
pub use cli::types::{Position, PositionFilter, SeasonId};
pub use error::{LeagueError, Result};
pub use league::{models, LeagueData};

pub const STORE_URL_ENV_VAR: &str = "DYNASTY_FFL_STORE_URL";
pub const API_KEY_ENV_VAR: &str = "DYNASTY_FFL_API_KEY";
