// Web UI error types

use button_creator_clipboard::ClipboardError;
use button_creator_core::StyleError;

/// Web UI specific errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// Input change carried a field name outside the fixed key set
    #[error("input error: {0}")]
    Input(#[from] StyleError),

    /// Snippet could not be placed on the clipboard
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
