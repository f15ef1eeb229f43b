//! List links command

use colored::Colorize;

use super::helpers::format_link_line;
use crate::interfaces::cli::CliError;
use crate::services::Workspace;

pub fn list_links(workspace: &Workspace, limit: Option<usize>, json: bool) -> Result<(), CliError> {
    let links = match limit {
        Some(limit) => workspace.recent_links(limit),
        None => workspace.links(),
    };

    if json {
        let output = serde_json::to_string_pretty(links)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize links: {}", e)))?;
        println!("{}", output);
        return Ok(());
    }

    if links.is_empty() {
        println!("{} No links yet.", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Saved links:".bold().green());
    println!();
    for link in links {
        println!("  {}", format_link_line(link));
    }
    println!();
    println!(
        "{} Showing {} of {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green(),
        workspace.links().len()
    );
    Ok(())
}
