//! Helper functions for link management CLI commands

use colored::Colorize;

use crate::cli::UtmArgs;
use crate::interfaces::cli::CliError;
use crate::services::{LinkDraft, Workspace};
use crate::storage::Link;
use crate::system::ClipboardProvider;

/// Build a draft from an optional template plus explicit flags
///
/// Template values are applied first; any flag given on the command line
/// overrides the corresponding template value.
pub fn build_draft(
    workspace: &Workspace,
    base_url: String,
    utm: &UtmArgs,
    template: Option<String>,
) -> Result<LinkDraft, CliError> {
    let mut draft = LinkDraft::builder(base_url, Default::default());

    if let Some(name) = template {
        let template = workspace.apply_template(&name).ok_or_else(|| {
            CliError::CommandError(format!("Template not found: {}", name))
        })?;
        draft.apply_template(template);
    }

    utm.overlay(&mut draft.params);
    Ok(draft)
}

/// Copy text to the clipboard and report the result
///
/// 确认信息写到 stderr，stdout 只留给命令输出。
pub fn copy_to_clipboard(clipboard: &dyn ClipboardProvider, text: &str) -> Result<(), CliError> {
    if text.is_empty() {
        return Ok(());
    }
    clipboard.write_text(text)?;
    eprintln!("{} Copied to clipboard", "✓".bold().green());
    Ok(())
}

/// First 8 characters of a link id, enough for `copy <ID>`
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// One-line summary of a link: short id, campaign, final URL and clicks
pub fn format_link_line(link: &Link) -> String {
    let campaign = if link.campaign().is_empty() {
        crate::analytics::PLACEHOLDER
    } else {
        link.campaign()
    };
    format!(
        "{} {} {} {}",
        short_id(&link.id).dimmed(),
        campaign.bold(),
        link.final_url.blue().underline(),
        format!("({} clicks)", format_count(link.clicks)).dimmed().cyan()
    )
}

/// Thousands-separated count, e.g. 12,345
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
