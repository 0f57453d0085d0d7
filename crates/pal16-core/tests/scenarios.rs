// crates/pal16-core/tests/scenarios.rs

use pal16_core::matcher::{weighted_distance, MatchKind};
use pal16_core::{match_color, match_color_detailed, match_rgb, Color, PALETTE};

#[test]
fn opaque_black_is_exact() {
    assert_eq!(match_color(Color::rgba(0, 0, 0, 255)), 0);
}

#[test]
fn opaque_white_is_exact() {
    assert_eq!(match_color(Color::rgba(255, 255, 255, 255)), 15);
}

#[test]
fn near_black_takes_fast_path() {
    let m = match_color_detailed(Color::rgba(3, 2, 4, 255));
    assert_eq!(m.index, 0);
    assert_eq!(m.kind, MatchKind::Fuzzy);
}

#[test]
fn transparent_forces_black() {
    assert_eq!(match_color(Color::rgba(200, 200, 0, 0)), 0);
}

#[test]
fn mid_gray_picks_smaller_weighted_distance() {
    let input = Color::rgb(128, 128, 128);
    let gray = weighted_distance(input, PALETTE[7]);
    let dark_gray = weighted_distance(input, PALETTE[8]);
    assert!(gray < dark_gray, "gray={gray} dark_gray={dark_gray}");
    assert_eq!(match_rgb(128, 128, 128), 7);
}

#[test]
fn rgb_entry_assumes_opaque() {
    // would be 0 if alpha were taken as transparent
    assert_eq!(match_rgb(255, 255, 85), 14);
    assert_eq!(match_rgb(200, 200, 0), match_color(Color::rgba(200, 200, 0, 255)));
}
