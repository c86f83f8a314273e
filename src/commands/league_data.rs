//! Teams, seasons and active-season commands

use super::common::{print_json, CommandContext, EMPTY_CELL};
use crate::{
    cli::OutputArgs,
    store::types::{Season, Team},
    Result,
};

/// `Gridiron Gang (Ben Holcomb)`
pub fn format_team_line(team: &Team) -> String {
    format!(
        "{} ({})",
        team.name.as_deref().unwrap_or(EMPTY_CELL),
        team.owner_name.as_deref().unwrap_or(EMPTY_CELL)
    )
}

/// `2025 [active] 8c1f6f0e`
pub fn format_season_line(season: &Season) -> String {
    let marker = if season.is_active { " [active]" } else { "" };
    format!("{}{} {}", season.year, marker, season.id)
}

/// Handle the teams command
pub async fn handle_teams(ctx: &CommandContext, output: OutputArgs) -> Result<()> {
    let teams = ctx.league.teams().await?;

    if output.json {
        return print_json(&teams);
    }

    // tarpaulin::skip - console output
    for team in &teams {
        println!("{}", format_team_line(team));
    }
    Ok(())
}

/// Handle the seasons command
pub async fn handle_seasons(ctx: &CommandContext, output: OutputArgs) -> Result<()> {
    let seasons = ctx.league.seasons().await?;

    if output.json {
        return print_json(&seasons);
    }

    for season in &seasons {
        println!("{}", format_season_line(season)); // tarpaulin::skip
    }
    Ok(())
}

/// Handle the active season command
pub async fn handle_active_season(ctx: &CommandContext, output: OutputArgs) -> Result<()> {
    let season = ctx.league.active_season().await?;

    if output.json {
        return print_json(&season);
    }

    match season {
        Some(season) => println!("{}", format_season_line(&season)),
        None => println!("No active season"),
    }
    Ok(())
}
