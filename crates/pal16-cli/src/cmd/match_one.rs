// crates/pal16-cli/src/cmd/match_one.rs

use anyhow::Context;
use clap::Args;
use pal16_core::matcher::MatchKind;
use pal16_core::validate::ChannelPolicy;
use pal16_core::{match_color_detailed, Color, PALETTE};

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Color as #rgb, #rgba, #rrggbb, #rrggbbaa or r,g,b[,a]
    #[arg(long, allow_hyphen_values = true)]
    pub color: String,

    /// Clamp out-of-range decimal channels instead of rejecting them
    #[arg(long, default_value_t = false)]
    pub clamp: bool,

    /// Print which rule chose the index and the palette entry
    #[arg(long, default_value_t = false)]
    pub explain: bool,
}

pub fn run(args: MatchArgs) -> anyhow::Result<()> {
    let policy = if args.clamp { ChannelPolicy::Clamp } else { ChannelPolicy::Strict };
    let color = Color::parse_with(&args.color, policy)
        .with_context(|| format!("parse --color {:?}", args.color))?;

    let m = match_color_detailed(color);

    if !args.explain {
        println!("{}", m.index);
        return Ok(());
    }

    let (rule, distance) = match m.kind {
        MatchKind::Transparent => ("transparent", None),
        MatchKind::Fuzzy => ("fuzzy", None),
        MatchKind::Nearest { distance } => ("nearest", Some(distance)),
    };

    println!("input    = {}", color);
    println!("index    = {}", m.index);
    println!("entry    = #{}", PALETTE[m.index].to_hex6());
    println!("rule     = {}", rule);
    if let Some(d) = distance {
        println!("distance = {:.6}", d);
    }
    Ok(())
}
