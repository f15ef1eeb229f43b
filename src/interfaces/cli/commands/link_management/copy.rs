//! Copy a saved link's final URL

use colored::Colorize;

use super::helpers::copy_to_clipboard;
use crate::interfaces::cli::CliError;
use crate::services::Workspace;
use crate::system::{ClipboardProvider, SystemClipboard};

pub fn copy_link(workspace: &Workspace, id: &str) -> Result<(), CliError> {
    copy_link_with(workspace, id, &SystemClipboard)
}

pub(crate) fn copy_link_with(
    workspace: &Workspace,
    id: &str,
    clipboard: &dyn ClipboardProvider,
) -> Result<(), CliError> {
    let link = workspace.find_link(id)?;
    copy_to_clipboard(clipboard, &link.final_url)?;
    println!("{}", link.final_url.blue().underline());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::interfaces::cli::commands::link_management::helpers::tests::RecordingClipboard;
    use crate::services::{LinkDraft, SystemRecordSource};
    use crate::storage::MemoryStore;

    #[test]
    fn test_copy_by_id_prefix() {
        let mut ws = Workspace::open(
            Arc::new(MemoryStore::new()),
            Arc::new(SystemRecordSource::default()),
        );
        let link = ws
            .create_link(LinkDraft::quick("https://x.com", "fb", "social", "launch"))
            .unwrap()
            .clone();

        let clipboard = RecordingClipboard::default();
        copy_link_with(&ws, &link.id[..8], &clipboard).unwrap();
        assert_eq!(*clipboard.copied.borrow(), vec![link.final_url]);
    }

    #[test]
    fn test_unknown_id_copies_nothing() {
        let ws = Workspace::open(
            Arc::new(MemoryStore::new()),
            Arc::new(SystemRecordSource::default()),
        );
        let clipboard = RecordingClipboard::default();

        assert!(copy_link_with(&ws, "missing", &clipboard).is_err());
        assert!(clipboard.copied.borrow().is_empty());
    }
}
