//! Rivalries command

use super::common::{format_points, or_dash, print_json, CommandContext};
use crate::{
    cli::OutputArgs,
    league::{
        compute::series_record,
        models::{Rivalry, RivalryMatchup, Winner},
    },
    Result,
};

/// `Ben (Gridiron Gang)`, or the bare governor when no team resolved.
pub fn format_governor(governor: &str, team_name: Option<&str>) -> String {
    match team_name {
        Some(team) => format!("{} ({})", governor, team),
        None => governor.to_string(),
    }
}

/// `2024  120.00 - 118.00  Ben`
pub fn format_matchup_line(rivalry: &Rivalry, matchup: &RivalryMatchup) -> String {
    let winner = match matchup.winner {
        Winner::Team1 => rivalry.team1_governor.as_str(),
        Winner::Team2 => rivalry.team2_governor.as_str(),
        Winner::Unknown => "-",
    };
    format!(
        "{}  {} - {}  {}",
        matchup.season,
        format_points(matchup.team1_score),
        format_points(matchup.team2_score),
        winner
    )
}

/// Every line printed for one rivalry.
pub fn format_rivalry(rivalry: &Rivalry) -> Vec<String> {
    let record = series_record(&rivalry.matchups);
    let mut lines = vec![
        rivalry.game_name.clone(),
        format!(
            "  {} vs {}",
            format_governor(&rivalry.team1_governor, rivalry.team1_name.as_deref()),
            format_governor(&rivalry.team2_governor, rivalry.team2_name.as_deref()),
        ),
        format!("  Trophy: {}", or_dash(rivalry.trophy_name.as_deref())),
    ];
    if let Some(slogan) = &rivalry.slogan {
        lines.push(format!("  \"{}\"", slogan));
    }
    lines.push(format!(
        "  Series: {} {} - {} {}",
        rivalry.team1_governor, record.team1_wins, record.team2_wins, rivalry.team2_governor
    ));
    lines.extend(
        rivalry
            .matchups
            .iter()
            .map(|m| format!("    {}", format_matchup_line(rivalry, m))),
    );
    lines
}

/// Handle the rivalries command
pub async fn handle_rivalries(ctx: &CommandContext, output: OutputArgs) -> Result<()> {
    let rivalries = ctx.league.rivalries().await?;

    if output.json {
        return print_json(&rivalries);
    }

    if rivalries.is_empty() {
        println!("No rivalries found"); // tarpaulin::skip
        return Ok(());
    }

    // tarpaulin::skip - console output
    for rivalry in &rivalries {
        for line in format_rivalry(rivalry) {
            println!("{}", line);
        }
        if let Some(story) = &rivalry.origin_story {
            for paragraph in story {
                println!("  {}", paragraph);
            }
        }
        println!();
    }
    Ok(())
}
