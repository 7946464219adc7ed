//! Score formatting strategies
//!
//! The game's stock popup and the configured judgment display share one
//! interface; which one a score effect uses is decided by whether a
//! configuration is active.

use crate::config::{Color, DisplayConfig};
use crate::formatter::judge::Judge;
use crate::score::ScoreInput;
use std::sync::Arc;

/// Stock popup alpha for scores above 90% of the maximum
const STOCK_HIGH_SCORE_ALPHA: f32 = 1.0;
/// Stock popup alpha for everything else
const STOCK_LOW_SCORE_ALPHA: f32 = 0.3;

/// What the presentation layer should show for one scoring event
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedScore {
    pub text: String,
    pub color: Color,
    /// Show the "perfect accuracy" indicator next to the text
    pub max_accuracy_indicator: bool,
}

/// Turns a score into display text and color
pub trait ScoreFormatter: Send + Sync {
    /// `base_color` is the color the host would use without any formatting
    fn format(&self, input: &ScoreInput, base_color: Color) -> FormattedScore;

    /// Whether the text should be refreshed while the score is still changing
    fn intermediate_updates(&self) -> bool {
        true
    }
}

/// The game's own popup: plain score, dimmed unless near the maximum
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl ScoreFormatter for DefaultFormatter {
    fn format(&self, input: &ScoreInput, base_color: Color) -> FormattedScore {
        let high = input.score as f64 > input.max_score as f64 * 0.9;
        let alpha = if high {
            STOCK_HIGH_SCORE_ALPHA
        } else {
            STOCK_LOW_SCORE_ALPHA
        };

        FormattedScore {
            text: input.score.to_string(),
            color: base_color.with_alpha_multiplier(alpha),
            max_accuracy_indicator: input.accuracy == input.max_accuracy,
        }
    }
}

/// Judgment display driven by a [`DisplayConfig`]
#[derive(Debug, Clone)]
pub struct JudgmentFormatter {
    judge: Arc<Judge>,
}

impl JudgmentFormatter {
    pub fn new(config: Arc<DisplayConfig>) -> Self {
        Self::from_judge(Arc::new(Judge::new(config)))
    }

    /// Share an already compiled judge
    pub fn from_judge(judge: Arc<Judge>) -> Self {
        Self { judge }
    }

    pub fn config(&self) -> &DisplayConfig {
        self.judge.config()
    }
}

impl ScoreFormatter for JudgmentFormatter {
    fn format(&self, input: &ScoreInput, _base_color: Color) -> FormattedScore {
        let judgment = self.judge.judge(input);
        FormattedScore {
            text: judgment.text,
            color: judgment.color,
            max_accuracy_indicator: false,
        }
    }

    fn intermediate_updates(&self) -> bool {
        self.judge.config().do_intermediate_updates
    }
}

/// Pick the formatter for an optional active configuration
pub fn formatter_for(config: Option<Arc<DisplayConfig>>) -> Box<dyn ScoreFormatter> {
    match config {
        Some(config) => Box::new(JudgmentFormatter::new(config)),
        None => Box::new(DefaultFormatter),
    }
}
