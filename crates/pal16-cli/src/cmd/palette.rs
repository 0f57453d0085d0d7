// crates/pal16-cli/src/cmd/palette.rs

use clap::Args;
use pal16_core::palette::{palette_id_hex, PALETTE};

use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Output file path; if omitted, prints to stdout
    #[arg(long)]
    pub output: Option<String>,
}

pub fn run(args: PaletteArgs) -> anyhow::Result<()> {
    match args.output.as_deref() {
        Some(p) => jsonl::write_palette_file(p, &PALETTE)?,
        None => jsonl::write_palette_stdout(&PALETTE)?,
    }
    eprintln!("palette_id = {}", palette_id_hex());
    Ok(())
}
