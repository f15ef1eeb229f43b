//! System-level modules
//!
//! - Logging initialization
//! - Clipboard access

pub mod clipboard;
pub mod logging;

pub use clipboard::{ClipboardProvider, SystemClipboard};
pub use logging::init_logging;
