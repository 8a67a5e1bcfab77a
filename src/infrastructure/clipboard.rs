use arboard::Clipboard;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("Failed to copy to clipboard: {0}")]
    Write(String),
}

pub struct ClipboardService;

impl ClipboardService {
    /// Copies `text` to the system clipboard.
    pub fn copy(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Clipboard::new().map_err(|e| {
            warn!(error = %e, "clipboard unavailable");
            ClipboardError::Unavailable(e.to_string())
        })?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        debug!(len = text.len(), "copied to clipboard");
        Ok(())
    }
}
