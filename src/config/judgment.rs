//! Judgment and segment rule structures

use super::Color;
use serde::{Deserialize, Deserializer, Serialize};

/// One entry in the primary judgment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentTier {
    /// Inclusive lower bound on the total score
    #[serde(default)]
    pub threshold: i32,
    /// Display text, a template when the display mode is `format`
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_color")]
    pub color: Color,
    /// Interpolate toward the next stricter tier's color
    #[serde(default)]
    pub fade: bool,
}

fn default_color() -> Color {
    Color::WHITE
}

impl JudgmentTier {
    pub fn new(threshold: i32, text: impl Into<String>, color: Color, fade: bool) -> Self {
        Self {
            threshold,
            text: text.into(),
            color,
            fade,
        }
    }
}

/// Text-only rule for one sub-metric (before, after, accuracy or timing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentTier {
    #[serde(default)]
    pub threshold: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

/// Segment texts may be written as `null` in config files
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SegmentTier {
    pub fn new(threshold: f64, text: impl Into<String>) -> Self {
        Self {
            threshold,
            text: text.into(),
        }
    }
}
