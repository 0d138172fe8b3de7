//! Statusline segments and composition.
//!
//! Styles use only named ANSI colors and the Dim attribute so the line
//! adapts to the user's terminal theme — no `Color::Rgb`, no bright
//! variants.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Separator between rendered segments.
pub const SEPARATOR: &str = " │ ";

/// One independently-optional piece of the statusline.
pub struct Segment {
    pub text: String,
    pub style: ContentStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub fn prompt_style() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Dim.into(),
        ..Default::default()
    }
}

pub fn git_style() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Magenta),
        ..Default::default()
    }
}

pub fn model_style() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Blue),
        attributes: Attribute::Dim.into(),
        ..Default::default()
    }
}

/// Join the non-empty segments in order, each wrapped in its style's escape
/// sequences, separated by [`SEPARATOR`]. All-empty input composes to an
/// empty string — the renderer still prints the (empty) line.
pub fn compose(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|segment| !segment.text.is_empty())
        .map(|segment| segment.style.apply(&segment.text).to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Shorten a model display name: drop the leading `"Claude "` and hyphenate
/// the rest. The literal string `"null"` (the host serializes an absent
/// model that way) is treated as no model at all.
pub fn shorten_model_name(model: &str) -> String {
    if model.is_empty() || model == "null" {
        return String::new();
    }
    model.replacen("Claude ", "", 1).replace(' ', "-")
}
