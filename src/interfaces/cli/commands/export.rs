//! Export links command

use std::io::{self, Write};

use colored::Colorize;

use super::link_management::helpers::copy_to_clipboard;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::services::Workspace;
use crate::system::{ClipboardProvider, SystemClipboard};
use crate::utils::csv_handler;

pub fn export_links(
    workspace: &Workspace,
    config: &StaticConfig,
    file_path: Option<String>,
    stdout: bool,
    copy: bool,
) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    export_links_to(
        workspace,
        config,
        file_path,
        stdout,
        copy,
        &SystemClipboard,
        &mut out,
    )
}

/// `--stdout` 时 `out` 中只有 CSV 文本
pub(crate) fn export_links_to(
    workspace: &Workspace,
    config: &StaticConfig,
    file_path: Option<String>,
    stdout: bool,
    copy: bool,
    clipboard: &dyn ClipboardProvider,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let csv = workspace.export_csv()?;

    if copy {
        copy_to_clipboard(clipboard, &csv)?;
    }

    if stdout {
        out.write_all(csv.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| CliError::CommandError(format!("Failed to write CSV: {}", e)))?;
        return Ok(());
    }

    // --copy alone doesn't write a file
    if copy && file_path.is_none() {
        return Ok(());
    }

    let output_path = file_path.unwrap_or_else(|| config.export.default_filename.clone());
    csv_handler::export_to_csv(workspace.links(), &output_path)?;

    writeln!(
        out,
        "{} Exported {} links to: {}",
        "✓".bold().green(),
        workspace.links().len().to_string().green(),
        output_path.cyan()
    )
    .map_err(|e| CliError::CommandError(e.to_string()))?;
    Ok(())
}
