// crates/pal16-core/src/matcher.rs
//
// Nearest-palette-entry search: transparency shortcut, per-channel fuzzy
// fast path, then an exhaustive redness-weighted squared distance.

use crate::color::Color;
use crate::palette::PALETTE;

/// Alpha below this degenerates to black (index 0).
pub const TRANSPARENCY_THRESHOLD: u8 = 128;

/// Per-channel tolerance for the fast path.
pub const FUZZY_TOLERANCE: i32 = 5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MatchKind {
    /// alpha < TRANSPARENCY_THRESHOLD
    Transparent,
    /// first palette entry within FUZZY_TOLERANCE on every channel
    Fuzzy,
    /// weighted nearest neighbor
    Nearest { distance: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorMatch {
    pub index: usize,
    pub kind: MatchKind,
}

/// True when every rgb channel differs by at most FUZZY_TOLERANCE. Alpha is ignored.
#[inline]
pub fn are_identical(a: Color, b: Color) -> bool {
    let close = |x: u8, y: u8| (x as i32 - y as i32).abs() <= FUZZY_TOLERANCE;
    close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b)
}

/// Redness-weighted squared distance.
///
/// `rmean` stays fractional; red and blue weights always sum to 4 + 255/256,
/// green is a constant 4.
pub fn weighted_distance(c1: Color, c2: Color) -> f64 {
    let rmean = (c1.r as f64 + c2.r as f64) / 2.0;
    let dr = (c1.r as i32 - c2.r as i32) as f64;
    let dg = (c1.g as i32 - c2.g as i32) as f64;
    let db = (c1.b as i32 - c2.b as i32) as f64;

    let weight_r = 2.0 + rmean / 256.0;
    let weight_g = 4.0;
    let weight_b = 2.0 + (255.0 - rmean) / 256.0;

    weight_r * dr * dr + weight_g * dg * dg + weight_b * db * db
}

/// Index in 0..=15 of the palette entry closest to `color`.
#[inline]
pub fn match_color(color: Color) -> usize {
    match_color_detailed(color).index
}

/// `match_color` for an opaque color.
#[inline]
pub fn match_rgb(r: u8, g: u8, b: u8) -> usize {
    match_color(Color::rgb(r, g, b))
}

/// Same result as `match_color`, plus which rule produced it.
pub fn match_color_detailed(color: Color) -> ColorMatch {
    if color.a < TRANSPARENCY_THRESHOLD {
        return ColorMatch { index: 0, kind: MatchKind::Transparent };
    }
    if let Some(index) = first_identical(&PALETTE, color) {
        return ColorMatch { index, kind: MatchKind::Fuzzy };
    }
    // PALETTE is non-empty, so nearest() always yields.
    let (index, distance) = nearest(&PALETTE, color).unwrap_or((0, 0.0));
    ColorMatch { index, kind: MatchKind::Nearest { distance } }
}

/// Lowest index within tolerance, regardless of which candidate is closer.
fn first_identical(table: &[Color], color: Color) -> Option<usize> {
    table.iter().position(|&p| are_identical(p, color))
}

/// Minimum weighted distance; only a strictly smaller distance replaces the
/// running best, so equal distances keep the earlier index.
fn nearest(table: &[Color], color: Color) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in table.iter().enumerate() {
        let d = weighted_distance(color, p);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_priority_is_declaration_order_not_closeness() {
        // Both entries are within tolerance; index 1 is the exact hit.
        let table = [Color::rgb(100, 100, 100), Color::rgb(104, 104, 104)];
        let input = Color::rgb(104, 104, 104);
        assert_eq!(first_identical(&table, input), Some(0));
        assert_eq!(nearest(&table, input).map(|(i, _)| i), Some(1));
    }

    #[test]
    fn fuzzy_tolerance_is_per_channel() {
        let p = Color::rgb(50, 50, 50);
        assert!(are_identical(p, Color::rgb(55, 45, 55)));
        assert!(!are_identical(p, Color::rgb(56, 50, 50)));
        assert!(!are_identical(p, Color::rgb(50, 50, 44)));
        // alpha plays no part
        assert!(are_identical(p, Color::rgba(50, 50, 50, 0)));
    }

    #[test]
    fn nearest_keeps_first_on_equal_distance() {
        let table = [Color::rgb(0, 0, 0), Color::rgb(0, 100, 0), Color::rgb(0, 100, 0)];
        let input = Color::rgb(0, 50, 0);
        let (i, d) = nearest(&table, input).unwrap();
        assert_eq!(i, 0);
        assert_eq!(d, 4.0 * 50.0 * 50.0);
    }

    #[test]
    fn nearest_accepts_zero_distance_first_candidate() {
        let table = [Color::rgb(10, 20, 30), Color::rgb(10, 20, 30)];
        assert_eq!(nearest(&table, Color::rgb(10, 20, 30)), Some((0, 0.0)));
        assert_eq!(nearest(&[], Color::rgb(10, 20, 30)), None);
    }

    #[test]
    fn weighted_distance_formula() {
        // rmean = 149 -> weights 2.58203125 / 4 / 2.4140625, dr = dg = db = -42
        let d = weighted_distance(Color::rgb(128, 128, 128), Color::rgb(170, 170, 170));
        assert_eq!(d, 1764.0 * (2.58203125 + 4.0 + 2.4140625));

        // rmean = 106.5 keeps its fractional half
        let d = weighted_distance(Color::rgb(128, 128, 128), Color::rgb(85, 85, 85));
        assert_eq!(d, 1849.0 * (2.416015625 + 4.0 + 2.580078125));
    }

    #[test]
    fn detailed_reports_rule() {
        assert_eq!(
            match_color_detailed(Color::rgba(200, 200, 0, 0)).kind,
            MatchKind::Transparent
        );
        assert_eq!(match_color_detailed(Color::rgb(3, 2, 4)).kind, MatchKind::Fuzzy);
        match match_color_detailed(Color::rgb(128, 128, 128)).kind {
            MatchKind::Nearest { distance } => assert!(distance > 0.0),
            other => panic!("expected weighted search, got {other:?}"),
        }
    }
}
