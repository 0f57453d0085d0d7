pub mod error;
pub mod validate;

pub mod color;
pub mod format;
pub mod matcher;
pub mod palette;
pub mod stream;

pub use crate::color::Color;
pub use crate::matcher::{match_color, match_color_detailed, match_rgb, ColorMatch, MatchKind};
pub use crate::palette::{PALETTE, PALETTE_LEN};
