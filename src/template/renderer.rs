//! Compiled templates and rendering against a score

use crate::config::DisplayConfig;
use crate::score::ScoreInput;
use crate::template::ast::{Grammar, Specifier, Token};
use crate::template::cache::TemplateCache;
use crate::template::number::{format_percent, format_timing};
use crate::template::scanner::{scan, Tokens};
use crate::tier::{lookup_segment, lookup_timing_segment};

/// A scanned format string, ready to render any number of times
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    grammar: Grammar,
    tokens: Tokens,
}

impl Template {
    pub fn compile(source: &str, grammar: Grammar) -> Self {
        Self {
            grammar,
            tokens: scan(source, grammar),
        }
    }

    #[inline]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when rendering never depends on the score
    pub fn is_literal(&self) -> bool {
        self.tokens.iter().all(|t| matches!(t, Token::Literal(_)))
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::new();
        self.render_into(&mut out, ctx);
        out
    }

    pub fn render_into(&self, out: &mut String, ctx: &RenderContext<'_>) {
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Value(spec) => ctx.expand(*spec, out),
            }
        }
    }
}

/// Everything a template can refer to while rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub input: &'a ScoreInput,
    pub config: &'a DisplayConfig,
    cache: Option<&'a TemplateCache>,
}

impl<'a> RenderContext<'a> {
    pub fn new(input: &'a ScoreInput, config: &'a DisplayConfig) -> Self {
        Self {
            input,
            config,
            cache: None,
        }
    }

    /// Reuse precompiled timing segment templates
    pub fn with_cache(mut self, cache: &'a TemplateCache) -> Self {
        self.cache = Some(cache);
        self
    }

    fn expand(&self, spec: Specifier, out: &mut String) {
        let input = self.input;
        let config = self.config;

        match spec {
            Specifier::Before => out.push_str(&input.before.to_string()),
            Specifier::After => out.push_str(&input.after.to_string()),
            Specifier::Accuracy => out.push_str(&input.accuracy.to_string()),
            Specifier::Score => out.push_str(&input.score.to_string()),
            Specifier::Percent => out.push_str(&format_percent(input.percent())),
            Specifier::TimeDependence => out.push_str(&self.timing()),
            Specifier::BeforeSegment => out.push_str(lookup_segment(
                input.before as f64,
                config.before_cut_angle_judgments.as_deref(),
            )),
            Specifier::AfterSegment => out.push_str(lookup_segment(
                input.after as f64,
                config.after_cut_angle_judgments.as_deref(),
            )),
            Specifier::AccuracySegment => out.push_str(lookup_segment(
                input.accuracy as f64,
                config.accuracy_judgments.as_deref(),
            )),
            Specifier::TimeDependenceSegment => self.expand_timing_segment(out),
        }
    }

    fn timing(&self) -> String {
        format_timing(
            self.input.time_dependence,
            self.config.time_dependence_decimal_offset,
            self.config.time_dependence_decimal_precision,
        )
    }

    /// `%T`: the segment text goes through the restricted grammar, so it
    /// can only expand `%t` and never recurses
    fn expand_timing_segment(&self, out: &mut String) {
        let segment = match lookup_timing_segment(
            self.input.time_dependence,
            self.config.time_dependence_judgments.as_deref(),
        ) {
            Some(segment) => segment,
            None => return,
        };

        match self.cache.and_then(|c| c.restricted(&segment.text)) {
            Some(template) => template.render_into(out, self),
            None => Template::compile(&segment.text, Grammar::Restricted).render_into(out, self),
        }
    }
}

/// Compile and render a judgment text in one go
pub fn render(format: &str, ctx: &RenderContext<'_>) -> String {
    Template::compile(format, Grammar::Full).render(ctx)
}
