//! Add link commands (builder form and quick-create)

use colored::Colorize;

use super::helpers::{build_draft, copy_to_clipboard};
use crate::cli::UtmArgs;
use crate::interfaces::cli::CliError;
use crate::services::{LinkDraft, Workspace};
use crate::storage::Link;
use crate::system::{ClipboardProvider, SystemClipboard};

pub fn add_link(
    workspace: &mut Workspace,
    base_url: String,
    utm: &UtmArgs,
    template: Option<String>,
    copy: bool,
) -> Result<(), CliError> {
    add_link_with(workspace, base_url, utm, template, copy, &SystemClipboard)
}

pub(crate) fn add_link_with(
    workspace: &mut Workspace,
    base_url: String,
    utm: &UtmArgs,
    template: Option<String>,
    copy: bool,
    clipboard: &dyn ClipboardProvider,
) -> Result<(), CliError> {
    let draft = build_draft(workspace, base_url, utm, template)?;
    let link = workspace.create_link(draft)?;
    print_created(link);

    // 链接已经保存，复制失败只给出警告
    if copy && let Err(e) = copy_to_clipboard(clipboard, &link.final_url) {
        eprintln!("{} {}", "⚠".bold().yellow(), e.format_simple());
    }
    Ok(())
}

pub fn quick_link(
    workspace: &mut Workspace,
    base_url: &str,
    source: &str,
    medium: &str,
    campaign: &str,
) -> Result<(), CliError> {
    let draft = LinkDraft::quick(base_url, source, medium, campaign);
    let link = workspace.create_link(draft)?;
    print_created(link);
    Ok(())
}

fn print_created(link: &Link) {
    println!(
        "{} Created UTM for campaign \"{}\"",
        "✓".bold().green(),
        link.campaign().cyan()
    );
    println!("  {}", link.final_url.blue().underline());
    println!(
        "  {}",
        format!("id: {}  clicks: {}", link.id, link.clicks).dimmed()
    );
}
