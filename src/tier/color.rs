//! Judgment color resolution

use crate::config::{Color, JudgmentTier};

/// Normalized position of `value` between `a` and `b`, clamped to [0, 1]
///
/// Returns 0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Final color for a matched tier
///
/// Fading is controlled by the matched tier alone: with `fade` set, the color
/// moves toward `adjacent`'s color as the score approaches its threshold.
pub fn resolve_color(score: i32, matched: &JudgmentTier, adjacent: &JudgmentTier) -> Color {
    if !matched.fade || std::ptr::eq(matched, adjacent) {
        return matched.color;
    }

    let t = inverse_lerp(
        matched.threshold as f32,
        adjacent.threshold as f32,
        score as f32,
    );
    matched.color.lerp(adjacent.color, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(100.0, 110.0, 105.0), 0.5);
        assert_eq!(inverse_lerp(100.0, 110.0, 90.0), 0.0);
        assert_eq!(inverse_lerp(100.0, 110.0, 200.0), 1.0);
        assert_eq!(inverse_lerp(5.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_no_fade_returns_own_color() {
        let top = JudgmentTier::new(110, "", Color::WHITE, false);
        let low = JudgmentTier::new(100, "", RED, false);
        assert_eq!(resolve_color(109, &low, &top), RED);
    }

    #[test]
    fn test_fade_interpolates() {
        let top = JudgmentTier::new(110, "", Color::WHITE, false);
        let low = JudgmentTier::new(100, "", BLACK, true);
        assert_eq!(resolve_color(105, &low, &top), Color::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(resolve_color(100, &low, &top), BLACK);
    }

    #[test]
    fn test_fade_without_partner() {
        let only = JudgmentTier::new(0, "", RED, true);
        assert_eq!(resolve_color(500, &only, &only), RED);
    }

    #[test]
    fn test_fade_equal_thresholds() {
        let a = JudgmentTier::new(50, "", Color::WHITE, false);
        let b = JudgmentTier::new(50, "", RED, true);
        assert_eq!(resolve_color(50, &b, &a), RED);
    }

    #[test]
    fn test_fade_flag_read_from_matched_tier() {
        let top = JudgmentTier::new(115, "%s", Color::WHITE, true);
        let low = JudgmentTier::new(101, "ok", RED, false);
        assert_eq!(resolve_color(108, &low, &top), RED);
    }
}
