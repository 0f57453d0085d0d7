// crates/pal16-core/src/color.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{Pal16Error, Result};
use crate::validate::{color_from_ints, ChannelPolicy};

/// 8-bit RGBA value. No identity beyond its channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    #[inline]
    pub fn into_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_hex6(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse text with an explicit channel policy for the decimal form.
    ///
    /// Accepted forms:
    /// * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    /// * `r,g,b` or `r,g,b,a` (decimal, whitespace around items allowed)
    pub fn parse_with(s: &str, policy: ChannelPolicy) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Pal16Error::Parse("empty color string".into()));
        }
        match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => parse_decimal(s, policy),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = Pal16Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, ChannelPolicy::Strict)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

fn parse_hex(hex: &str) -> Result<Color> {
    let nibble = |c: u8| -> Result<u8> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(Pal16Error::Parse(format!("invalid hex digit {:?}", c as char))),
        }
    };
    let byte = |hi: u8, lo: u8| -> Result<u8> { Ok(nibble(hi)? << 4 | nibble(lo)?) };

    let b = hex.as_bytes();
    match b.len() {
        // short forms expand x -> xx
        3 => Ok(Color::rgb(nibble(b[0])? * 17, nibble(b[1])? * 17, nibble(b[2])? * 17)),
        4 => Ok(Color::rgba(
            nibble(b[0])? * 17,
            nibble(b[1])? * 17,
            nibble(b[2])? * 17,
            nibble(b[3])? * 17,
        )),
        6 => Ok(Color::rgb(byte(b[0], b[1])?, byte(b[2], b[3])?, byte(b[4], b[5])?)),
        8 => Ok(Color::rgba(
            byte(b[0], b[1])?,
            byte(b[2], b[3])?,
            byte(b[4], b[5])?,
            byte(b[6], b[7])?,
        )),
        n => Err(Pal16Error::Parse(format!("invalid hex length {n} (want 3, 4, 6 or 8)"))),
    }
}

fn parse_decimal(s: &str, policy: ChannelPolicy) -> Result<Color> {
    let mut vals = [0i64, 0, 0, 255];
    let items: Vec<&str> = s.split(',').map(str::trim).collect();
    if items.len() != 3 && items.len() != 4 {
        return Err(Pal16Error::Parse(format!(
            "expected r,g,b or r,g,b,a, got {} components",
            items.len()
        )));
    }
    for (slot, item) in vals.iter_mut().zip(&items) {
        *slot = item
            .parse::<i64>()
            .map_err(|e| Pal16Error::Parse(format!("bad component {item:?}: {e}")))?;
    }
    color_from_ints(vals[0], vals[1], vals[2], vals[3], policy)
}
