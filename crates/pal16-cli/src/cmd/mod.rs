// crates/pal16-cli/src/cmd/mod.rs

pub mod inspect;
pub mod match_one;
pub mod palette;
pub mod quantize;
