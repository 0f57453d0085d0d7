// crates/pal16-cli/src/cmd/quantize.rs

use clap::Args;
use pal16_core::stream;
use pal16_core::validate::ChannelPolicy;

use crate::io::{bin, colors_file, jsonl};

#[derive(Args, Debug)]
pub struct QuantizeArgs {
    /// Input text file: one color per line (#hex or r,g,b[,a]); `//` lines are comments
    #[arg(long)]
    pub r#in: String,

    /// Clamp out-of-range decimal channels instead of rejecting them
    #[arg(long, default_value_t = false)]
    pub clamp: bool,

    /// Output format: "jsonl" or "bin" (.p16q container)
    #[arg(long, default_value = "jsonl")]
    pub out: String,

    /// Output file path; if omitted, prints to stdout (jsonl only)
    #[arg(long)]
    pub output: Option<String>,
}

pub fn run(args: QuantizeArgs) -> anyhow::Result<()> {
    let policy = if args.clamp { ChannelPolicy::Clamp } else { ChannelPolicy::Strict };
    let colors = colors_file::load_colors(&args.r#in, policy)?;
    let indices = stream::quantize(&colors);

    match args.out.as_str() {
        "jsonl" => {
            if let Some(p) = args.output.as_deref() {
                jsonl::write_matches_file(p, &colors, &indices)?;
            } else {
                jsonl::write_matches_stdout(&colors, &indices)?;
            }
        }
        "bin" => {
            let p = args
                .output
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--out bin requires --output <file>"))?;
            bin::write_p16q_file(p, &indices)?;
        }
        other => anyhow::bail!("unknown --out format: {other}"),
    }

    eprintln!("quantized = {} colors", indices.len());
    Ok(())
}
