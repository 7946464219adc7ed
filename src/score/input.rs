//! Per-cut score breakdown handed to the formatter

use serde::{Deserialize, Serialize};

/// Maximum total score of a standard note
pub const STANDARD_MAX_SCORE: i32 = 115;

/// Maximum centre-distance (accuracy) score of a standard note
pub const STANDARD_MAX_ACCURACY: i32 = 15;

/// Score breakdown for a single scoring event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    /// Total score
    pub score: i32,
    /// Pre-swing component
    pub before: i32,
    /// Post-swing component
    pub after: i32,
    /// Centre-distance component
    pub accuracy: i32,
    /// Signed timing offset of the cut
    pub time_dependence: f64,
    /// Theoretical maximum of `score`, used for percentages
    #[serde(default = "default_max_score")]
    pub max_score: i32,
    #[serde(default = "default_max_accuracy")]
    pub max_accuracy: i32,
}

fn default_max_score() -> i32 {
    STANDARD_MAX_SCORE
}

fn default_max_accuracy() -> i32 {
    STANDARD_MAX_ACCURACY
}

impl ScoreInput {
    pub fn new(score: i32, before: i32, after: i32, accuracy: i32, time_dependence: f64) -> Self {
        Self {
            score,
            before,
            after,
            accuracy,
            time_dependence,
            max_score: STANDARD_MAX_SCORE,
            max_accuracy: STANDARD_MAX_ACCURACY,
        }
    }

    pub fn with_max_score(mut self, max_score: i32) -> Self {
        self.max_score = max_score;
        self
    }

    pub fn with_max_accuracy(mut self, max_accuracy: i32) -> Self {
        self.max_accuracy = max_accuracy;
        self
    }

    /// Score as a percentage of `max_score`, or `None` when the maximum is
    /// not positive
    #[inline]
    pub fn percent(&self) -> Option<f64> {
        if self.max_score <= 0 {
            return None;
        }
        Some(self.score as f64 / self.max_score as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let input = ScoreInput::new(115, 70, 30, 15, 0.0);
        assert_eq!(input.percent(), Some(100.0));
        assert_eq!(input.with_max_score(0).percent(), None);
    }

    #[test]
    fn test_deserialize_defaults_maxima() {
        let input: ScoreInput = serde_json::from_str(
            r#"{"score": 100, "before": 70, "after": 20, "accuracy": 10, "timeDependence": 0.25}"#,
        )
        .unwrap();
        assert_eq!(input.max_score, STANDARD_MAX_SCORE);
        assert_eq!(input.max_accuracy, STANDARD_MAX_ACCURACY);
        assert_eq!(input.time_dependence, 0.25);
    }
}
