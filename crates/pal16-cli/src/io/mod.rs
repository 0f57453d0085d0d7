// crates/pal16-cli/src/io/mod.rs

pub mod bin;
pub mod colors_file;
pub mod jsonl;
