// Core data models for the button creator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Input control kind for a style field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Hex color, rendered as a color picker
    Color,
    /// Unit-less number, `px` is appended at render time
    Number,
}

impl FieldKind {
    /// HTML input type attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Color => "color",
            FieldKind::Number => "number",
        }
    }
}

/// Style attribute names (fixed key set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    BackgroundColor,
    SelectedBackgroundColor,
    TextColor,
    BorderColor,
    BorderWidth,
    BorderRadius,
    PaddingTopBottom,
    PaddingLeftRight,
    FontSize,
    LineHeight,
}

impl StyleField {
    /// All fields in form order
    pub const ALL: [StyleField; 10] = [
        StyleField::BackgroundColor,
        StyleField::SelectedBackgroundColor,
        StyleField::TextColor,
        StyleField::BorderColor,
        StyleField::BorderWidth,
        StyleField::BorderRadius,
        StyleField::PaddingTopBottom,
        StyleField::PaddingLeftRight,
        StyleField::FontSize,
        StyleField::LineHeight,
    ];

    /// Attribute name as used in the form (`name` attribute)
    pub fn name(&self) -> &'static str {
        match self {
            StyleField::BackgroundColor => "backgroundColor",
            StyleField::SelectedBackgroundColor => "selectedBackgroundColor",
            StyleField::TextColor => "textColor",
            StyleField::BorderColor => "borderColor",
            StyleField::BorderWidth => "borderWidth",
            StyleField::BorderRadius => "borderRadius",
            StyleField::PaddingTopBottom => "paddingTopBottom",
            StyleField::PaddingLeftRight => "paddingLeftRight",
            StyleField::FontSize => "fontSize",
            StyleField::LineHeight => "lineHeight",
        }
    }

    /// Human readable label shown next to the control
    pub fn label(&self) -> &'static str {
        match self {
            StyleField::BackgroundColor => "Background Color",
            StyleField::SelectedBackgroundColor => "Selected Background Color",
            StyleField::TextColor => "Text Color",
            StyleField::BorderColor => "Border Color",
            StyleField::BorderWidth => "Border Width",
            StyleField::BorderRadius => "Border Radius",
            StyleField::PaddingTopBottom => "Padding Top/Bottom",
            StyleField::PaddingLeftRight => "Padding Left/Right",
            StyleField::FontSize => "Font Size",
            StyleField::LineHeight => "Line Height",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            StyleField::BackgroundColor
            | StyleField::SelectedBackgroundColor
            | StyleField::TextColor
            | StyleField::BorderColor => FieldKind::Color,
            _ => FieldKind::Number,
        }
    }

    /// Fields grouped into the paired form rows
    pub fn rows() -> impl Iterator<Item = [StyleField; 2]> {
        let all: &'static [StyleField] = &Self::ALL;
        all.chunks_exact(2).map(|pair| [pair[0], pair[1]])
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleField {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| StyleError::UnknownField(s.to_string()))
    }
}

/// Button style configuration
///
/// Every field is always present. Values are kept as the raw strings the
/// inputs produce, numeric ones without a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleConfig {
    pub background_color: String,
    pub selected_background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub border_width: String,
    pub border_radius: String,
    pub padding_top_bottom: String,
    pub padding_left_right: String,
    pub font_size: String,
    pub line_height: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#0097f9".to_string(),
            selected_background_color: "#999999".to_string(),
            text_color: "#ffffff".to_string(),
            border_color: "#666666".to_string(),
            border_width: "1".to_string(),
            border_radius: "5".to_string(),
            padding_top_bottom: "5".to_string(),
            padding_left_right: "20".to_string(),
            font_size: "16".to_string(),
            line_height: "28".to_string(),
        }
    }
}

impl StyleConfig {
    pub fn get(&self, field: StyleField) -> &str {
        match field {
            StyleField::BackgroundColor => &self.background_color,
            StyleField::SelectedBackgroundColor => &self.selected_background_color,
            StyleField::TextColor => &self.text_color,
            StyleField::BorderColor => &self.border_color,
            StyleField::BorderWidth => &self.border_width,
            StyleField::BorderRadius => &self.border_radius,
            StyleField::PaddingTopBottom => &self.padding_top_bottom,
            StyleField::PaddingLeftRight => &self.padding_left_right,
            StyleField::FontSize => &self.font_size,
            StyleField::LineHeight => &self.line_height,
        }
    }

    fn slot_mut(&mut self, field: StyleField) -> &mut String {
        match field {
            StyleField::BackgroundColor => &mut self.background_color,
            StyleField::SelectedBackgroundColor => &mut self.selected_background_color,
            StyleField::TextColor => &mut self.text_color,
            StyleField::BorderColor => &mut self.border_color,
            StyleField::BorderWidth => &mut self.border_width,
            StyleField::BorderRadius => &mut self.border_radius,
            StyleField::PaddingTopBottom => &mut self.padding_top_bottom,
            StyleField::PaddingLeftRight => &mut self.padding_left_right,
            StyleField::FontSize => &mut self.font_size,
            StyleField::LineHeight => &mut self.line_height,
        }
    }

    /// Replace a single field, leaving the others untouched.
    ///
    /// The value is stored as-is; malformed numbers simply produce
    /// malformed CSS downstream.
    pub fn set_field(&mut self, field: StyleField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// String-keyed variant of [`StyleConfig::set_field`] (input `name` attribute)
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), StyleError> {
        let field = name.parse::<StyleField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Returns a copy with one field replaced
    pub fn with_field(&self, field: StyleField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set_field(field, value);
        next
    }

    /// `(field, value)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (StyleField, &str)> + '_ {
        let all: &'static [StyleField] = &StyleField::ALL;
        all.iter().map(move |field| (*field, self.get(*field)))
    }
}

/// Visual state of a preview button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Normal,
    Selected,
}

/// Text shown on the snippet trigger button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerLabel {
    #[default]
    Idle,
    Copied,
}

impl TriggerLabel {
    pub const IDLE_TEXT: &'static str = "Create snippet";
    pub const COPIED_TEXT: &'static str = "Snippet copied!";

    pub fn text(&self) -> &'static str {
        match self {
            TriggerLabel::Idle => Self::IDLE_TEXT,
            TriggerLabel::Copied => Self::COPIED_TEXT,
        }
    }
}

/// Style-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown style field: {0}")]
    UnknownField(String),
}
