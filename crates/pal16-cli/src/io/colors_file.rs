// crates/pal16-cli/src/io/colors_file.rs

use anyhow::Context;
use pal16_core::validate::ChannelPolicy;
use pal16_core::Color;

/// Load one color per non-empty line. Lines starting with `//` are skipped.
/// Errors carry the 1-based line number.
pub fn load_colors(path: &str, policy: ChannelPolicy) -> anyhow::Result<Vec<Color>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read colors {path}"))?;
    let colors = parse_colors(&text, policy).with_context(|| format!("parse colors {path}"))?;
    log::info!("loaded {} colors from {}", colors.len(), path);
    Ok(colors)
}

fn parse_colors(text: &str, policy: ChannelPolicy) -> anyhow::Result<Vec<Color>> {
    let mut out = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let c = Color::parse_with(line, policy).with_context(|| format!("line {}", n + 1))?;
        out.push(c);
    }
    Ok(out)
}
