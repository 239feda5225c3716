// Inline styles for the live preview buttons

use crate::models::{PreviewState, StyleConfig};

/// Layout declarations shared by every preview button
const FIXED_DECLARATIONS: &str =
    "width: 100%; cursor: pointer; position: relative; display: block; margin-left: 0;";

/// Background color for the given preview state
pub fn preview_background(config: &StyleConfig, state: PreviewState) -> &str {
    match state {
        PreviewState::Normal => &config.background_color,
        PreviewState::Selected => &config.selected_background_color,
    }
}

/// Inline `style` attribute value for a preview button.
///
/// Mirrors the declarations of the exported snippet without `!important`.
pub fn preview_style(config: &StyleConfig, state: PreviewState) -> String {
    format!(
        "background-color: {}; color: {}; border: {}px solid {}; border-radius: {}px; \
         padding: {}px {}px; font-size: {}px; line-height: {}px; {}",
        preview_background(config, state),
        config.text_color,
        config.border_width,
        config.border_color,
        config.border_radius,
        config.padding_top_bottom,
        config.padding_left_right,
        config.font_size,
        config.line_height,
        FIXED_DECLARATIONS,
    )
}
