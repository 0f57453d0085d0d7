// crates/pal16-core/src/validate.rs
//
// Input-domain policy for integers arriving from outside the `Color` type.
// `Color` itself stores u8 channels, so anything already a `Color` is in range.

use crate::color::Color;
use crate::error::{Pal16Error, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ChannelPolicy {
    /// Reject anything outside 0..=255.
    #[default]
    Strict,
    /// Saturate into 0..=255.
    Clamp,
}

/// Convert one channel value to u8 under `policy`.
///
/// `name` only feeds the error message ("red", "alpha", ...).
pub fn channel(name: &str, value: i64, policy: ChannelPolicy) -> Result<u8> {
    match policy {
        ChannelPolicy::Strict => u8::try_from(value).map_err(|_| {
            Pal16Error::Validation(format!("{name} must be in 0..=255, got {value}"))
        }),
        ChannelPolicy::Clamp => Ok(value.clamp(0, 255) as u8),
    }
}

pub fn color_from_ints(r: i64, g: i64, b: i64, a: i64, policy: ChannelPolicy) -> Result<Color> {
    Ok(Color::rgba(
        channel("red", r, policy)?,
        channel("green", g, policy)?,
        channel("blue", b, policy)?,
        channel("alpha", a, policy)?,
    ))
}
