//! Hit Score Judge - Configurable judgment display for rhythm game score popups
//!
//! Maps a cut's score breakdown to a judgment color and display text:
//! threshold-matched judgment tiers with optional color fading, and a small
//! `%`-escaped template language with per-metric segment lookups.
//!
//! ```
//! use hit_score_judge::{judge, DisplayConfig, ScoreInput};
//!
//! let config = DisplayConfig::default();
//! let judgment = judge(&ScoreInput::new(115, 70, 30, 15, 0.0), &config);
//! assert_eq!(judgment.text, "+Fantastic + \n115");
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod config;
pub mod error;
pub mod formatter;
pub mod score;
pub mod template;
pub mod tier;

#[cfg(feature = "python")]
mod python;

pub use config::{default_config, Color, DisplayConfig, DisplayMode, JudgmentTier, SegmentTier};
pub use error::{JudgmentError, Result};
pub use formatter::{
    formatter_for, judge, ConfigProvider, DefaultFormatter, FormattedScore, Judge, Judgment,
    JudgmentFormatter, ScoreFormatter,
};
pub use score::ScoreInput;
