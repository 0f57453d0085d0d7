// crates/pal16-core/src/palette.rs

use crate::color::Color;

pub const PALETTE_LEN: usize = 16;

/// The fixed 16-entry reference table. Index order is significant: both the
/// fast path and the weighted search break ties toward the lower index.
///
/// What each slot means (name, escape code, protocol token) is up to the caller.
pub const PALETTE: [Color; PALETTE_LEN] = [
    Color::rgb(0, 0, 0),       // 0 black
    Color::rgb(0, 0, 170),     // 1 dark blue
    Color::rgb(0, 170, 0),     // 2 dark green
    Color::rgb(0, 170, 170),   // 3 dark aqua
    Color::rgb(170, 0, 0),     // 4 dark red
    Color::rgb(170, 0, 170),   // 5 dark purple
    Color::rgb(255, 170, 0),   // 6 gold
    Color::rgb(170, 170, 170), // 7 gray
    Color::rgb(85, 85, 85),    // 8 dark gray
    Color::rgb(85, 85, 255),   // 9 blue
    Color::rgb(85, 255, 85),   // A green
    Color::rgb(85, 255, 255),  // B aqua
    Color::rgb(255, 85, 85),   // C red
    Color::rgb(255, 85, 255),  // D light purple
    Color::rgb(255, 255, 85),  // E yellow
    Color::rgb(255, 255, 255), // F white
];

#[inline]
pub fn palette_color(index: usize) -> Option<Color> {
    PALETTE.get(index).copied()
}

/// Stable identifier of the table: blake3 over r,g,b bytes in index order,
/// truncated to 16 bytes.
pub fn palette_id_16() -> [u8; 16] {
    let mut bytes = [0u8; PALETTE_LEN * 3];
    for (chunk, c) in bytes.chunks_exact_mut(3).zip(PALETTE.iter()) {
        chunk.copy_from_slice(&c.into_rgb());
    }
    let hash = blake3::hash(&bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn palette_id_hex() -> String {
    hex16(&palette_id_16())
}

pub(crate) fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
