// Application settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the button creator.
///
/// The browser app uses the compiled-in defaults; every field may be
/// omitted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatorSettings {
    /// Card title
    pub title: String,

    /// Delay before the trigger label reverts (milliseconds)
    pub revert_delay_ms: u32,

    /// Labels of the preview buttons, top to bottom
    pub preview_labels: Vec<String>,

    /// `tracing` filter directive installed at startup
    pub log_filter: String,
}

impl CreatorSettings {
    pub const DEFAULT_REVERT_DELAY_MS: u32 = 1_000;

    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.revert_delay_ms))
    }
}

impl Default for CreatorSettings {
    fn default() -> Self {
        Self {
            title: "Instapage Button Creator".to_string(),
            revert_delay_ms: Self::DEFAULT_REVERT_DELAY_MS,
            preview_labels: vec![
                "Button 1".to_string(),
                "Button 2".to_string(),
                "Button 3".to_string(),
            ],
            log_filter: "info,button_creator=debug".to_string(),
        }
    }
}
