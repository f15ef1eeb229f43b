//! Workspace state and record providers
//!
//! Shared by every interface (currently the CLI).

pub mod records;
pub mod workspace;

pub use records::{RecordSource, SystemRecordSource};
pub use workspace::{LinkDraft, RecordKeys, Workspace, with_link, with_template};
