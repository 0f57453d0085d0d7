// crates/pal16-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "pal16-cli")]
#[command(about = "Quantize colors to the fixed 16-color palette", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a single color and print its palette index
    Match(cmd::match_one::MatchArgs),

    /// Quantize a file of colors (one per line) to palette indices
    Quantize(cmd::quantize::QuantizeArgs),

    /// Print the palette table and its id
    Palette(cmd::palette::PaletteArgs),

    /// Inspect a .p16q packed index file (count, palette id, histogram)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Match(args) => cmd::match_one::run(args),
        Commands::Quantize(args) => cmd::quantize::run(args),
        Commands::Palette(args) => cmd::palette::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
