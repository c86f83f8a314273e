//! Salary and practice squad commands

use super::common::{format_salary_cell, or_dash, print_json, CommandContext};
use crate::{
    cli::{
        types::{Position, PositionFilter},
        OutputArgs,
    },
    league::{
        compute::{filter_by_position, group_by_team},
        models::{PlayerSalaryWithDetails, TeamSquad},
    },
    Result,
};

pub const FRANCHISE_TAG_LEGEND: &str = "Franchise Tagged players: $100/year for 4 seasons";

/// Practice squad spots per team.
pub const PRACTICE_SQUAD_SPOTS: usize = 3;

/// `* Allen, Josh  QB  Gridiron Gang  R2  $45 $50 - -`; the star marks a
/// franchise tag.
pub fn format_salary_line(player: &PlayerSalaryWithDetails) -> String {
    let tag = if player.franchise_tag { "*" } else { " " };
    let round = player
        .rookie_draft_round
        .as_deref()
        .map(|r| format!("R{}", r));

    format!(
        "{} {}, {}  {}  {}  {}  {} {} {} {}",
        tag,
        player.last_name,
        player.first_name,
        player.position,
        player.fantasy_team,
        or_dash(round.as_deref()),
        format_salary_cell(player.salary_2025.as_deref()),
        format_salary_cell(player.salary_2026.as_deref()),
        format_salary_cell(player.salary_2027.as_deref()),
        format_salary_cell(player.salary_2028.as_deref()),
    )
}

/// `QB = Quarterback  RB = Running Back ...`
pub fn position_legend() -> String {
    [Position::QB, Position::RB, Position::WR, Position::TE]
        .iter()
        .map(|p| format!("{} = {}", p, p.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Team heading, one line per player, and the footer with spots and total.
pub fn format_team_squad(squad: &TeamSquad) -> Vec<String> {
    let mut lines = Vec::with_capacity(squad.players.len() + 2);
    lines.push(squad.team_name.clone());
    lines.extend(squad.players.iter().map(|p| {
        format!("  {} ({})  {}", p.player_name, p.position, p.salary)
    }));
    lines.push(format!(
        "  {}/{} spots filled  Total: ${}",
        squad.players.len(),
        PRACTICE_SQUAD_SPOTS,
        squad.total_salary
    ));
    lines
}

/// Handle the salaries command
pub async fn handle_salaries(
    ctx: &CommandContext,
    position: PositionFilter,
    output: OutputArgs,
) -> Result<()> {
    let salaries = ctx.league.player_salaries().await?;
    let players = filter_by_position(&salaries, position);

    if output.json {
        return print_json(&players);
    }

    // tarpaulin::skip - console output
    println!("{}", FRANCHISE_TAG_LEGEND);
    println!();
    if players.is_empty() {
        println!("No players found");
    }
    for player in players {
        println!("{}", format_salary_line(player));
    }
    println!();
    println!("{}", position_legend());
    Ok(())
}

/// Handle the practice squad command
pub async fn handle_practice_squad(ctx: &CommandContext, output: OutputArgs) -> Result<()> {
    let squads = group_by_team(ctx.league.practice_squad().await?);

    if output.json {
        return print_json(&squads);
    }

    if squads.is_empty() {
        println!("No practice squad players found"); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    for squad in &squads {
        for line in format_team_squad(squad) {
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}
