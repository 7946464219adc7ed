//! Threshold matching for judgment tiers and sub-metric segments

use crate::config::{JudgmentTier, SegmentTier};

/// Result of matching a score against the primary judgment list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSelection<'a> {
    /// Position of `matched` in the list
    pub index: usize,
    pub matched: &'a JudgmentTier,
    /// Next stricter tier, or `matched` itself when nothing is stricter
    pub adjacent: &'a JudgmentTier,
}

/// Select the judgment tier for a score
///
/// `tiers` must be ordered by descending threshold. The first tier whose
/// threshold is at most `score` wins; when the score is below every
/// threshold the lowest tier is used instead. Returns `None` only for an
/// empty list.
pub fn select_tier(score: i32, tiers: &[JudgmentTier]) -> Option<TierSelection<'_>> {
    let index = match tiers.iter().position(|t| t.threshold <= score) {
        Some(index) => index,
        None => lowest_tier_index(tiers)?,
    };

    let matched = &tiers[index];
    let adjacent = if index > 0 { &tiers[index - 1] } else { matched };

    Some(TierSelection {
        index,
        matched,
        adjacent,
    })
}

/// Index of the lowest threshold, taking the last entry among equals
fn lowest_tier_index(tiers: &[JudgmentTier]) -> Option<usize> {
    let lowest = tiers.iter().map(|t| t.threshold).min()?;
    tiers.iter().rposition(|t| t.threshold == lowest)
}

/// Look up the text for a before/after/accuracy sub-metric
///
/// Empty when the list is absent or no threshold qualifies.
#[inline]
pub fn lookup_segment(value: f64, segments: Option<&[SegmentTier]>) -> &str {
    segments
        .and_then(|list| list.iter().find(|s| value >= s.threshold))
        .map(|s| s.text.as_str())
        .unwrap_or("")
}

/// Look up the timing segment for a time dependence value
///
/// Unlike [`lookup_segment`], a non-empty list never comes back empty: if no
/// threshold qualifies the entry with the highest threshold is used.
pub fn lookup_timing_segment(value: f64, segments: Option<&[SegmentTier]>) -> Option<&SegmentTier> {
    let list = segments?;

    if let Some(segment) = list.iter().find(|s| value >= s.threshold) {
        return Some(segment);
    }

    // First entry wins among equal maxima
    list.iter().fold(None, |best: Option<&SegmentTier>, s| match best {
        Some(b) if b.threshold >= s.threshold => Some(b),
        _ => Some(s),
    })
}
