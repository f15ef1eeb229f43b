//! Clipboard access
//!
//! Enabled with the `clipboard` feature; without it every copy request
//! reports an error instead of silently doing nothing.

use crate::errors::{Result, UtmError};

pub trait ClipboardProvider {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// 系统剪贴板
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardProvider for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| UtmError::clipboard(format!("Clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| UtmError::clipboard(format!("Failed to copy: {}", e)))
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardProvider for SystemClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(UtmError::clipboard(
            "Clipboard support is not enabled (build with --features clipboard)",
        ))
    }
}
