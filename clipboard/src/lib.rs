// Clipboard export library for the button creator
//
// This crate provides clipboard abstraction with pluggable backends
// and the snippet export action built on top of it.

use button_creator_core::{generate_snippet, StyleConfig};

pub mod dom;
pub mod export;

pub use dom::DomClipboardBackend;
pub use export::{ExportAction, Scheduler, TimeoutScheduler};

/// Clipboard-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available on this platform")]
    Unsupported,

    #[error("no document or body to attach the copy buffer to")]
    NoDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("the browser rejected the copy command")]
    CopyRejected,
}

/// Clipboard backend trait
pub trait ClipboardBackend {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard service with pluggable backend
pub struct ClipboardService<B: ClipboardBackend> {
    backend: B,
}

impl<B: ClipboardBackend> ClipboardService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.backend.write_text(text)
    }

    /// Generate the snippet for `config` and place it on the clipboard
    pub fn copy_snippet(&self, config: &StyleConfig) -> Result<(), ClipboardError> {
        let snippet = generate_snippet(config);
        tracing::debug!(bytes = snippet.len(), "copying snippet");
        self.backend.write_text(&snippet)
    }
}
