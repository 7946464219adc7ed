//! Display configuration: rule lists plus rendering options

use super::{Color, JudgmentTier, SegmentTier};
use crate::error::{JudgmentError, Result};
use crate::template::number::MAX_DECIMAL_PRECISION;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How the judged text is produced from the matched tier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMode {
    /// Expand the tier text as a template
    Format,
    /// Tier text verbatim
    TextOnly,
    /// Score only
    Numeric,
    /// Score line above the tier text
    ScoreOnTop,
    /// Tier text above the score line. Any unrecognised mode name lands here.
    #[default]
    TextOnTop,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Format => "format",
            DisplayMode::TextOnly => "textOnly",
            DisplayMode::Numeric => "numeric",
            DisplayMode::ScoreOnTop => "scoreOnTop",
            DisplayMode::TextOnTop => "textOnTop",
        }
    }
}

impl From<&str> for DisplayMode {
    fn from(s: &str) -> Self {
        match s {
            "format" => DisplayMode::Format,
            "textOnly" => DisplayMode::TextOnly,
            "numeric" => DisplayMode::Numeric,
            "scoreOnTop" => DisplayMode::ScoreOnTop,
            _ => DisplayMode::TextOnTop,
        }
    }
}

impl From<String> for DisplayMode {
    fn from(s: String) -> Self {
        DisplayMode::from(s.as_str())
    }
}

impl From<DisplayMode> for String {
    fn from(mode: DisplayMode) -> Self {
        mode.as_str().to_string()
    }
}

fn default_decimal_precision() -> usize {
    1
}

fn default_decimal_offset() -> i32 {
    2
}

fn default_true() -> bool {
    true
}

/// Active judgment configuration
///
/// Deserialized from the same camelCase JSON layout the plugin's config
/// files use. Build one through [`DisplayConfig::from_json`] or
/// [`DisplayConfig::prepare`] so the rule lists are validated and sorted by
/// descending threshold before any judging happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default)]
    pub display_mode: DisplayMode,

    #[serde(default)]
    pub judgments: Vec<JudgmentTier>,

    #[serde(default, rename = "beforeCutAngleJudgments")]
    pub before_cut_angle_judgments: Option<Vec<SegmentTier>>,

    #[serde(default, rename = "accuracyJudgments")]
    pub accuracy_judgments: Option<Vec<SegmentTier>>,

    #[serde(default, rename = "afterCutAngleJudgments")]
    pub after_cut_angle_judgments: Option<Vec<SegmentTier>>,

    #[serde(
        default,
        rename = "timeDependencyJudgments",
        alias = "timeDependenceJudgments"
    )]
    pub time_dependence_judgments: Option<Vec<SegmentTier>>,

    /// Digits after the decimal point for `%t`
    #[serde(
        default = "default_decimal_precision",
        rename = "timeDependencyDecimalPrecision",
        alias = "timeDependenceDecimalPrecision"
    )]
    pub time_dependence_decimal_precision: usize,

    /// Power of ten applied to the timing value before formatting
    #[serde(
        default = "default_decimal_offset",
        rename = "timeDependencyDecimalOffset",
        alias = "timeDependenceDecimalOffset"
    )]
    pub time_dependence_decimal_offset: i32,

    /// Re-judge while the cut score is still settling
    #[serde(default = "default_true")]
    pub do_intermediate_updates: bool,
}

impl DisplayConfig {
    /// Parse, validate and sort a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DisplayConfig = serde_json::from_str(json)?;
        config.prepare()
    }

    /// Validate and sort an already built configuration
    pub fn prepare(mut self) -> Result<Self> {
        if let Err(err) = self.validate() {
            log::warn!("rejecting judgment config: {}", err);
            return Err(err);
        }
        self.sort_by_threshold();
        Ok(self)
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.judgments.is_empty() {
            return Err(JudgmentError::EmptyJudgments);
        }

        for (index, judgment) in self.judgments.iter().enumerate() {
            if !judgment.color.is_finite() {
                return Err(JudgmentError::InvalidColor {
                    index,
                    reason: "channels must be finite".to_string(),
                });
            }
        }

        for (list, segments) in self.segment_lists() {
            for (index, segment) in segments.iter().enumerate() {
                if !segment.threshold.is_finite() {
                    return Err(JudgmentError::InvalidThreshold { list, index });
                }
            }
        }

        if self.time_dependence_decimal_precision > MAX_DECIMAL_PRECISION {
            return Err(JudgmentError::InvalidPrecision {
                precision: self.time_dependence_decimal_precision,
                max: MAX_DECIMAL_PRECISION,
            });
        }

        Ok(())
    }

    /// Stable sort of every rule list by descending threshold
    ///
    /// Entries sharing a threshold keep their configured order, so the first
    /// one written still wins ties.
    pub fn sort_by_threshold(&mut self) {
        self.judgments.sort_by(|a, b| b.threshold.cmp(&a.threshold));

        for segments in [
            &mut self.before_cut_angle_judgments,
            &mut self.accuracy_judgments,
            &mut self.after_cut_angle_judgments,
            &mut self.time_dependence_judgments,
        ]
        .into_iter()
        .flatten()
        {
            segments.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        }
    }

    fn segment_lists(&self) -> impl Iterator<Item = (&'static str, &Vec<SegmentTier>)> {
        [
            ("beforeCutAngleJudgments", &self.before_cut_angle_judgments),
            ("accuracyJudgments", &self.accuracy_judgments),
            ("afterCutAngleJudgments", &self.after_cut_angle_judgments),
            ("timeDependencyJudgments", &self.time_dependence_judgments),
        ]
        .into_iter()
        .filter_map(|(name, list)| list.as_ref().map(|l| (name, l)))
    }
}

/// Shipped default configuration
static DEFAULT_CONFIG: Lazy<Arc<DisplayConfig>> = Lazy::new(|| {
    let dim = |text: &str| format!("<size=80%>%B{}%A</size>%n%s", text);

    Arc::new(DisplayConfig {
        display_mode: DisplayMode::Format,
        judgments: vec![
            JudgmentTier::new(115, "%BFantastic%A%n%s", Color::WHITE, false),
            JudgmentTier::new(101, dim("Excellent"), Color::new(0.0, 1.0, 0.0, 1.0), false),
            JudgmentTier::new(90, dim("Great"), Color::new(1.0, 0.98, 0.0, 1.0), true),
            JudgmentTier::new(80, dim("Good"), Color::new(1.0, 0.6, 0.0, 1.0), true),
            JudgmentTier::new(60, dim("Decent"), Color::new(1.0, 0.0, 0.0, 1.0), true),
            JudgmentTier::new(0, dim("Way Off"), Color::new(0.5, 0.0, 0.0, 1.0), true),
        ],
        before_cut_angle_judgments: Some(vec![
            SegmentTier::new(70.0, "+"),
            SegmentTier::new(0.0, " "),
        ]),
        accuracy_judgments: Some(vec![
            SegmentTier::new(15.0, "+"),
            SegmentTier::new(0.0, " "),
        ]),
        after_cut_angle_judgments: Some(vec![
            SegmentTier::new(30.0, " + "),
            SegmentTier::new(0.0, "   "),
        ]),
        time_dependence_judgments: None,
        time_dependence_decimal_precision: default_decimal_precision(),
        time_dependence_decimal_offset: default_decimal_offset(),
        do_intermediate_updates: true,
    })
});

/// Shared handle to the shipped default configuration
pub fn default_config() -> Arc<DisplayConfig> {
    DEFAULT_CONFIG.clone()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig::clone(&DEFAULT_CONFIG)
    }
}
