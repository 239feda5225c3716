// CSS snippet generation

use crate::models::StyleConfig;

/// Render the copy-pasteable `<style>` block for the given configuration.
///
/// Values are substituted verbatim, numeric ones suffixed with `px`.
pub fn generate_snippet(config: &StyleConfig) -> String {
    format!(
        r#"<style>
  input[type="radio"] {{ display: none !important; }}
  input + label {{
    background-color: {background} !important;
    color: {text} !important;
    border: {border_width}px solid {border_color} !important;
    border-radius: {border_radius}px !important;
    padding: {padding_tb}px {padding_lr}px !important;
    font-size: {font_size}px !important;
    line-height: {line_height}px !important;
    width: 100% !important;
    cursor: pointer !important;
    position: relative !important;
    display: block !important;
    margin-left: 0 !important;
  }}
  input[type=radio]:checked + label {{ background-color: {selected} !important; }}
  input + label::before {{ content: none !important; }}
</style>
"#,
        background = config.background_color,
        text = config.text_color,
        border_width = config.border_width,
        border_color = config.border_color,
        border_radius = config.border_radius,
        padding_tb = config.padding_top_bottom,
        padding_lr = config.padding_left_right,
        font_size = config.font_size,
        line_height = config.line_height,
        selected = config.selected_background_color,
    )
}
