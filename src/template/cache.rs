//! Precompiled templates for one configuration, keyed by source text

use crate::config::DisplayConfig;
use crate::template::ast::Grammar;
use crate::template::renderer::Template;
use ahash::AHashMap;

/// Every template a configuration can render, compiled once up front
///
/// Built when a configuration becomes active and read-only afterwards, so
/// concurrent judgments share it without locking.
#[derive(Debug, Clone, Default)]
pub struct TemplateCache {
    full: AHashMap<String, Template>,
    restricted: AHashMap<String, Template>,
}

impl TemplateCache {
    /// Compile judgment texts with the full grammar and timing segment texts
    /// with the restricted one
    pub fn for_config(config: &DisplayConfig) -> Self {
        let mut cache = Self {
            full: AHashMap::with_capacity(config.judgments.len()),
            restricted: AHashMap::new(),
        };

        for judgment in &config.judgments {
            cache
                .full
                .entry(judgment.text.clone())
                .or_insert_with(|| Template::compile(&judgment.text, Grammar::Full));
        }

        for segment in config.time_dependence_judgments.iter().flatten() {
            cache
                .restricted
                .entry(segment.text.clone())
                .or_insert_with(|| Template::compile(&segment.text, Grammar::Restricted));
        }

        log::debug!(
            "compiled {} judgment and {} timing segment templates",
            cache.full.len(),
            cache.restricted.len()
        );

        cache
    }

    #[inline]
    pub fn full(&self, source: &str) -> Option<&Template> {
        self.full.get(source)
    }

    #[inline]
    pub fn restricted(&self, source: &str) -> Option<&Template> {
        self.restricted.get(source)
    }

    pub fn len(&self) -> usize {
        self.full.len() + self.restricted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Color, JudgmentTier, SegmentTier};

    #[test]
    fn test_cache_dedupes_texts() {
        let config = DisplayConfig {
            judgments: vec![
                JudgmentTier::new(100, "%s", Color::WHITE, false),
                JudgmentTier::new(50, "%s", Color::WHITE, false),
                JudgmentTier::new(0, "miss", Color::WHITE, false),
            ],
            time_dependence_judgments: Some(vec![SegmentTier::new(0.0, "%t")]),
            ..DisplayConfig::default()
        };

        let cache = TemplateCache::for_config(&config);
        assert_eq!(cache.len(), 3);
        assert!(cache.full("%s").is_some());
        assert!(cache.full("%t").is_none());
        assert_eq!(
            cache.restricted("%t").map(|t| t.grammar()),
            Some(Grammar::Restricted)
        );
    }

    #[test]
    fn test_cache_without_timing_segments() {
        let config = DisplayConfig::default();
        let cache = TemplateCache::for_config(&config);
        assert!(!cache.is_empty());
        assert!(cache.restricted("%t").is_none());
    }
}
