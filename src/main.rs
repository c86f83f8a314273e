//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use dynasty_ffl::{
    cli::{Commands, DynastyFfl, GetCmd},
    commands::{
        common::CommandContext,
        league_data::{handle_active_season, handle_seasons, handle_teams},
        rivalries::handle_rivalries,
        salaries::{handle_practice_squad, handle_salaries},
        standings::{handle_playoffs, handle_standings},
    },
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log to stderr so stdout stays clean for `--json`. `RUST_LOG` wins over
/// the `--verbose` default.
fn setup_logging(verbose: bool) {
    let log_level = if verbose { "dynasty_ffl=debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .init();
}

async fn run(app: DynastyFfl) -> anyhow::Result<()> {
    let ctx = CommandContext::new(&app.store).context("Error loading store settings")?;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Teams { output } => handle_teams(&ctx, output)
                .await
                .context("Error loading teams")?,

            GetCmd::Seasons { output } => handle_seasons(&ctx, output)
                .await
                .context("Error loading seasons")?,

            GetCmd::ActiveSeason { output } => handle_active_season(&ctx, output)
                .await
                .context("Error loading active season")?,

            GetCmd::Standings { season_id, output } => handle_standings(&ctx, season_id, output)
                .await
                .context("Error loading standings")?,

            GetCmd::Playoffs { output } => handle_playoffs(&ctx, output)
                .await
                .context("Error loading playoff outcomes")?,

            GetCmd::Salaries { position, output } => handle_salaries(&ctx, position, output)
                .await
                .context("Error loading salaries")?,

            GetCmd::PracticeSquad { output } => handle_practice_squad(&ctx, output)
                .await
                .context("Error loading practice squad")?,

            GetCmd::Rivalries { output } => handle_rivalries(&ctx, output)
                .await
                .context("Error loading rivalries")?,
        },
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = DynastyFfl::parse();
    setup_logging(app.verbose);

    if let Err(e) = run(app).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
