//! Judgment orchestration: tier, color and display text for one score

use crate::config::{Color, DisplayConfig, DisplayMode, JudgmentTier};
use crate::score::ScoreInput;
use crate::template::{Grammar, RenderContext, Template, TemplateCache};
use crate::tier::{resolve_color, select_tier};
use std::sync::Arc;

/// Judged color and text for one scoring event
#[derive(Debug, Clone, PartialEq)]
pub struct Judgment {
    pub color: Color,
    /// Display text, may contain newlines
    pub text: String,
}

/// Judge a score against a configuration
///
/// Templates are compiled on the fly; [`Judge`] keeps them precompiled for
/// repeated use.
pub fn judge(input: &ScoreInput, config: &DisplayConfig) -> Judgment {
    judge_with(input, config, None)
}

pub(crate) fn judge_with(
    input: &ScoreInput,
    config: &DisplayConfig,
    cache: Option<&TemplateCache>,
) -> Judgment {
    let selection = match select_tier(input.score, &config.judgments) {
        Some(selection) => selection,
        None => {
            log::warn!("judgment requested with an empty judgment list");
            return Judgment {
                color: Color::WHITE,
                text: input.score.to_string(),
            };
        }
    };

    let color = resolve_color(input.score, selection.matched, selection.adjacent);
    let text = display_text(input, config, selection.matched, cache);

    Judgment { color, text }
}

fn display_text(
    input: &ScoreInput,
    config: &DisplayConfig,
    tier: &JudgmentTier,
    cache: Option<&TemplateCache>,
) -> String {
    match config.display_mode {
        DisplayMode::Format => {
            let mut ctx = RenderContext::new(input, config);
            if let Some(cache) = cache {
                ctx = ctx.with_cache(cache);
            }
            match cache.and_then(|c| c.full(&tier.text)) {
                Some(template) => template.render(&ctx),
                None => Template::compile(&tier.text, Grammar::Full).render(&ctx),
            }
        }
        DisplayMode::TextOnly => tier.text.clone(),
        DisplayMode::Numeric => input.score.to_string(),
        DisplayMode::ScoreOnTop => format!("{}\n{}\n", input.score, tier.text),
        DisplayMode::TextOnTop => format!("{}\n{}\n", tier.text, input.score),
    }
}

/// A configuration bundled with its precompiled templates
#[derive(Debug, Clone)]
pub struct Judge {
    config: Arc<DisplayConfig>,
    cache: TemplateCache,
}

impl Judge {
    pub fn new(config: impl Into<Arc<DisplayConfig>>) -> Self {
        let config = config.into();
        let cache = TemplateCache::for_config(&config);
        Self { config, cache }
    }

    #[inline]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Shared handle to the configuration
    #[inline]
    pub fn config_arc(&self) -> Arc<DisplayConfig> {
        Arc::clone(&self.config)
    }

    #[inline]
    pub fn judge(&self, input: &ScoreInput) -> Judgment {
        judge_with(input, &self.config, Some(&self.cache))
    }
}
