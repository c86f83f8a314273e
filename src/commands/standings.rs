//! Standings and playoff commands

use super::common::{format_optional_points, format_points, print_json, CommandContext};
use crate::{
    cli::{types::SeasonId, OutputArgs},
    league::{
        compute::standings_tiers,
        models::{PlayoffOutcome, StandingsTier, TeamWithStandings},
    },
    Result,
};

/// ` 1. Gridiron Gang (Ben Holcomb)  9-2  PA 14.00  PF 1402.30  PPW 127.50`
pub fn format_standing_line(standing: &TeamWithStandings) -> String {
    format!(
        "{:>2}. {} ({})  {}-{}  PA {}  PF {}  PPW {}",
        standing.rank,
        standing.name,
        standing.owner,
        standing.wins,
        standing.losses,
        format_points(standing.total_points),
        format_points(standing.points_for),
        format_points(standing.avg_ppw),
    )
}

/// Tier heading, with the caption when the tier has one.
pub fn format_tier_heading(tier: StandingsTier) -> String {
    match tier.caption() {
        Some(caption) => format!("== {} == ({})", tier.title(), caption),
        None => format!("== {} ==", tier.title()),
    }
}

pub fn format_outcome_line(outcome: &PlayoffOutcome) -> String {
    let finalist = if outcome.is_finalist { " [finalist]" } else { "" };
    format!(
        "{:>2}. {} ({}){}  semi {}  final {}",
        outcome.rank,
        outcome.team_name,
        outcome.owner_name,
        finalist,
        format_optional_points(outcome.semifinal_score),
        format_optional_points(outcome.finals_score),
    )
}

/// Handle the standings command
///
/// Without a season id the active season's standings are shown.
pub async fn handle_standings(
    ctx: &CommandContext,
    season_id: Option<SeasonId>,
    output: OutputArgs,
) -> Result<()> {
    let standings = match &season_id {
        Some(_) => ctx.league.season_standings(season_id.as_ref()).await?,
        None => ctx.league.active_season_standings().await?,
    };

    if output.json {
        return print_json(&standings);
    }

    if standings.is_empty() {
        println!("No standings available"); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    for (tier, members) in standings_tiers(&standings) {
        if members.is_empty() {
            continue;
        }
        println!("{}", format_tier_heading(tier));
        for standing in members {
            println!("{}", format_standing_line(standing));
        }
        println!();
    }
    Ok(())
}

/// Handle the playoffs command
pub async fn handle_playoffs(ctx: &CommandContext, output: OutputArgs) -> Result<()> {
    let outcomes = ctx.league.playoff_outcomes().await?;

    if output.json {
        return print_json(&outcomes);
    }

    if outcomes.is_empty() {
        println!("No playoff outcomes recorded"); // tarpaulin::skip
        return Ok(());
    }

    for outcome in &outcomes {
        println!("{}", format_outcome_line(outcome)); // tarpaulin::skip
    }
    Ok(())
}
