// crates/pal16-core/src/stream.rs

use crate::color::Color;
use crate::error::{Pal16Error, Result};
use crate::matcher::match_color;

/// Match every color; output[i] is the palette index for colors[i].
pub fn quantize(colors: &[Color]) -> Vec<u8> {
    let out: Vec<u8> = colors.iter().map(|&c| match_color(c) as u8).collect();
    log::debug!("quantized {} colors", out.len());
    out
}

/// Pack palette indices two per byte: (first<<4)|second.
///
/// An odd count leaves the final low nibble as 0; callers must carry the
/// count separately (see `format`).
pub fn pack_indices(indices: &[u8]) -> Result<Vec<u8>> {
    if let Some((pos, &bad)) = indices.iter().enumerate().find(|&(_, &x)| x > 0x0F) {
        return Err(Pal16Error::Validation(format!(
            "palette index out of range at {pos}: {bad} (max 15)"
        )));
    }

    let out = indices
        .chunks(2)
        .map(|pair| {
            let hi = pair[0];
            let lo = pair.get(1).copied().unwrap_or(0);
            (hi << 4) | lo
        })
        .collect();
    Ok(out)
}

/// Inverse of `pack_indices` for exactly `count` indices.
pub fn unpack_indices(packed: &[u8], count: usize) -> Result<Vec<u8>> {
    let need = count.div_ceil(2);
    if packed.len() < need {
        return Err(Pal16Error::Validation(format!(
            "unpack_indices short: need {} bytes for {} indices, got {}",
            need,
            count,
            packed.len()
        )));
    }

    let mut out = Vec::with_capacity(count);
    for &b in &packed[..need] {
        out.push(b >> 4);
        out.push(b & 0x0F);
    }
    out.truncate(count);
    Ok(out)
}
