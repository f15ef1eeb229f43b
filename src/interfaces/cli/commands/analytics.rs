//! Dashboard and analytics commands

use colored::Colorize;
use serde::Serialize;

use super::link_management::helpers::{format_count, format_link_line};
use crate::analytics::{AggregationRow, bar_scale};
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::services::Workspace;

/// Width of the proportional bars, in characters
const BAR_WIDTH: usize = 30;

pub fn show_dashboard(workspace: &Workspace, config: &StaticConfig) -> Result<(), CliError> {
    println!(
        "{} {}",
        config.workspace.team_name.bold().magenta(),
        format!("({})", config.workspace.primary_domain).dimmed()
    );
    println!();
    print_stats(workspace);
    println!();

    println!("{}", "Recent UTM links:".bold());
    let recent = workspace.recent_links(config.links.recent_limit);
    if recent.is_empty() {
        println!(
            "  {}",
            "No links yet. Create your first UTM link to get started.".dimmed()
        );
    } else {
        for link in recent {
            println!("  {}", format_link_line(link));
        }
    }
    Ok(())
}

pub fn show_stats(workspace: &Workspace, json: bool) -> Result<(), CliError> {
    if json {
        return print_json(&workspace.stats());
    }
    print_stats(workspace);
    Ok(())
}

/// Analytics view: campaigns in first-seen order
pub fn show_campaigns(workspace: &Workspace, json: bool) -> Result<(), CliError> {
    let rows = workspace.campaign_breakdown();
    if json {
        return print_json(&rows);
    }
    println!("{}", "Top campaigns".bold().green());
    print_bars(&rows);
    Ok(())
}

/// Comparisons view: mediums, highest total first
pub fn show_channels(workspace: &Workspace, json: bool) -> Result<(), CliError> {
    let rows = workspace.channel_comparison();
    if json {
        return print_json(&rows);
    }
    println!("{}", "Channel comparisons".bold().green());
    print_bars(&rows);
    Ok(())
}

fn print_stats(workspace: &Workspace) {
    let stats = workspace.stats();
    println!(
        "  {:<18}{}",
        "Total clicks".dimmed(),
        format_count(stats.total_clicks).bold()
    );
    println!("  {:<18}{}", "Top campaign".dimmed(), stats.top_campaign.bold());
    println!(
        "  {:<18}{}",
        "Unique campaigns".dimmed(),
        stats.unique_campaigns.to_string().bold()
    );
}

fn print_bars(rows: &[AggregationRow]) {
    if rows.is_empty() {
        println!("  {}", "No data yet.".dimmed());
        return;
    }

    let scale = bar_scale(rows);
    let key_width = rows.iter().map(|r| r.key.chars().count()).max().unwrap_or(0);
    for row in rows {
        println!(
            "  {:<width$}  {} {}",
            row.key,
            bar(row.total, scale).cyan(),
            format_count(row.total).dimmed(),
            width = key_width
        );
    }
}

/// Bar of `BAR_WIDTH * total / scale` blocks
pub fn bar(total: u64, scale: u64) -> String {
    let filled = (total.saturating_mul(BAR_WIDTH as u64) / scale.max(1)) as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::CommandError(format!("Failed to serialize output: {}", e)))?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_proportions() {
        assert_eq!(bar(0, 1), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(3, 0).chars().count(), BAR_WIDTH);
    }
}
