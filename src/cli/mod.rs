//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PositionFilter, SeasonId};

/// Store connection arguments shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// League database URL (or set `DYNASTY_FFL_STORE_URL` env var).
    #[clap(long, global = true)]
    pub store_url: Option<String>,

    /// Publishable API key (or set `DYNASTY_FFL_API_KEY` env var).
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Ignore cached query results and fetch fresh data.
    #[clap(long, global = true)]
    pub refresh: bool,

    /// Keep query results in memory only; don't read or write the disk cache.
    #[clap(long, global = true)]
    pub no_disk_cache: bool,
}

/// Output flag shared by every `get` command.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List every team in the league, ordered by name.
    Teams {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// List every season, newest first.
    Seasons {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Show the active season, if any.
    ActiveSeason {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Regular-season standings, grouped into playoff, purgatory and toilet bowl tiers.
    ///
    /// Uses the active season unless `--season-id` is given.
    Standings {
        /// Show standings for this season instead of the active one.
        #[clap(long)]
        season_id: Option<SeasonId>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Playoff outcomes for the active season.
    Playoffs {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Dynasty salary table, ordered by last name.
    Salaries {
        /// Filter by position: ALL, QB, RB, WR, TE, K or DEF.
        #[clap(short = 'p', long = "position", default_value_t = PositionFilter::All)]
        position: PositionFilter,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Practice squad players grouped by team, with salary totals.
    PracticeSquad {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Rivalry games with their resolved teams and matchup history.
    Rivalries {
        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "dynasty-ffl",
    about = "Dynasty league standings, salaries and rivalries"
)]
pub struct DynastyFfl {
    #[clap(flatten)]
    pub store: StoreArgs,

    /// Log request and cache activity to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch league data from the store.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
