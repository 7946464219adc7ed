//! Active configuration holder

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::formatter::judge::Judge;
use crate::formatter::strategy::{DefaultFormatter, JudgmentFormatter, ScoreFormatter};
use parking_lot::RwLock;
use std::sync::Arc;

/// Holds the active configuration with copy-on-replace semantics
///
/// Readers get an `Arc` snapshot; replacing the configuration swaps the
/// pointer and never touches a snapshot already handed out, so in-flight
/// judgments finish against the configuration they started with.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    active: RwLock<Option<Arc<Judge>>>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DisplayConfig) -> Result<Self> {
        let provider = Self::new();
        provider.set(config)?;
        Ok(provider)
    }

    /// Validate, sort and activate a configuration
    pub fn set(&self, config: DisplayConfig) -> Result<()> {
        let judge = Arc::new(Judge::new(config.prepare()?));
        log::debug!(
            "activating judgment config with {} judgments",
            judge.config().judgments.len()
        );
        *self.active.write() = Some(judge);
        Ok(())
    }

    /// Parse and activate a JSON configuration
    ///
    /// On error the previously active configuration stays in place.
    pub fn load_json(&self, json: &str) -> Result<()> {
        let config = DisplayConfig::from_json(json)?;
        self.set(config)
    }

    /// Deactivate; formatters fall back to the stock popup
    pub fn clear(&self) {
        *self.active.write() = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.read().is_some()
    }

    /// Snapshot of the active configuration
    pub fn current(&self) -> Option<Arc<DisplayConfig>> {
        self.active.read().as_ref().map(|judge| judge.config_arc())
    }

    /// Formatter for the active configuration, or the stock one
    pub fn formatter(&self) -> Box<dyn ScoreFormatter> {
        match self.active.read().as_ref() {
            Some(judge) => Box::new(JudgmentFormatter::from_judge(Arc::clone(judge))),
            None => Box::new(DefaultFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Color, DisplayMode, JudgmentTier};
    use crate::error::JudgmentError;
    use crate::score::ScoreInput;

    fn numeric_config() -> DisplayConfig {
        DisplayConfig {
            display_mode: DisplayMode::Numeric,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_inactive_provider_uses_stock_formatter() {
        let provider = ConfigProvider::new();
        assert!(!provider.is_active());
        assert!(provider.current().is_none());

        let input = ScoreInput::new(50, 20, 20, 10, 0.0);
        let formatted = provider.formatter().format(&input, Color::WHITE);
        assert_eq!(formatted.text, "50");
        assert_eq!(formatted.color.a, 0.3);
    }

    #[test]
    fn test_set_sorts_configuration() {
        let config = DisplayConfig {
            judgments: vec![
                JudgmentTier::new(0, "low", Color::WHITE, false),
                JudgmentTier::new(100, "high", Color::WHITE, false),
            ],
            ..DisplayConfig::default()
        };
        let provider = ConfigProvider::with_config(config).unwrap();
        let current = provider.current().unwrap();
        assert_eq!(current.judgments[0].text, "high");
    }

    #[test]
    fn test_replacement_keeps_old_snapshots() {
        let provider = ConfigProvider::with_config(DisplayConfig::default()).unwrap();
        let old_formatter = provider.formatter();
        let old_snapshot = provider.current().unwrap();

        provider.set(numeric_config()).unwrap();

        let input = ScoreInput::new(115, 70, 30, 15, 0.0);
        assert_eq!(old_snapshot.display_mode, DisplayMode::Format);
        assert_eq!(old_formatter.format(&input, Color::WHITE).text, "+Fantastic + \n115");
        assert_eq!(provider.formatter().format(&input, Color::WHITE).text, "115");
    }

    #[test]
    fn test_rejected_config_keeps_previous() {
        let _ = env_logger::builder().is_test(true).try_init();
        let provider = ConfigProvider::with_config(numeric_config()).unwrap();

        let err = provider.load_json(r#"{"judgments": []}"#).unwrap_err();
        assert!(matches!(err, JudgmentError::EmptyJudgments));
        assert_eq!(provider.current().unwrap().display_mode, DisplayMode::Numeric);
    }

    #[test]
    fn test_load_json_and_clear() {
        let provider = ConfigProvider::new();
        provider
            .load_json(r#"{"displayMode": "textOnly", "judgments": [{"threshold": 0, "text": "hit"}]}"#)
            .unwrap();
        assert!(provider.is_active());

        let input = ScoreInput::new(80, 60, 10, 10, 0.0);
        assert_eq!(provider.formatter().format(&input, Color::WHITE).text, "hit");

        provider.clear();
        assert!(!provider.is_active());
        assert_eq!(provider.formatter().format(&input, Color::WHITE).text, "80");
    }

    #[test]
    fn test_concurrent_readers() {
        let provider = Arc::new(ConfigProvider::with_config(numeric_config()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || {
                    let input = ScoreInput::new(100 + i, 70, 20, 10, 0.0);
                    provider.formatter().format(&input, Color::WHITE).text
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), (100 + i).to_string());
        }
    }
}
