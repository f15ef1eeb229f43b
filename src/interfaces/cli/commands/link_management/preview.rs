//! Preview command: compose without saving

use colored::Colorize;

use super::helpers::{build_draft, copy_to_clipboard};
use crate::cli::UtmArgs;
use crate::interfaces::cli::CliError;
use crate::services::Workspace;
use crate::system::SystemClipboard;

pub fn preview_link(
    workspace: &Workspace,
    base_url: String,
    utm: &UtmArgs,
    template: Option<String>,
    copy: bool,
) -> Result<(), CliError> {
    let draft = build_draft(workspace, base_url, utm, template)?;
    let final_url = draft.preview();

    if final_url.is_empty() {
        println!(
            "{} Your final URL will appear here once a base URL is given",
            "ℹ".bold().blue()
        );
        return Ok(());
    }

    println!("{}", final_url);

    if copy {
        copy_to_clipboard(&SystemClipboard, &final_url)?;
    }
    Ok(())
}
