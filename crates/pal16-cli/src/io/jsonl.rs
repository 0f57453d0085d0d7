// crates/pal16-cli/src/io/jsonl.rs

use anyhow::Context;
use pal16_core::Color;

/// Format: {"index":N,"color":"#rrggbbaa"}
fn match_line(c: Color, index: u8) -> String {
    format!("{{\"index\":{},\"color\":\"{}\"}}", index, c)
}

/// Format: {"index":N,"rgb":[r,g,b]}
fn palette_line(index: usize, c: Color) -> String {
    format!("{{\"index\":{},\"rgb\":[{},{},{}]}}", index, c.r, c.g, c.b)
}

pub fn write_matches_file(path: &str, colors: &[Color], indices: &[u8]) -> anyhow::Result<()> {
    let mut s = String::new();
    for (&c, &i) in colors.iter().zip(indices) {
        s.push_str(&match_line(c, i));
        s.push('\n');
    }
    std::fs::write(path, s).with_context(|| format!("write matches jsonl: {path}"))?;
    Ok(())
}

pub fn write_matches_stdout(colors: &[Color], indices: &[u8]) -> anyhow::Result<()> {
    for (&c, &i) in colors.iter().zip(indices) {
        println!("{}", match_line(c, i));
    }
    Ok(())
}

pub fn write_palette_file(path: &str, palette: &[Color]) -> anyhow::Result<()> {
    let mut s = String::new();
    for (i, &c) in palette.iter().enumerate() {
        s.push_str(&palette_line(i, c));
        s.push('\n');
    }
    std::fs::write(path, s).with_context(|| format!("write palette jsonl: {path}"))?;
    Ok(())
}

pub fn write_palette_stdout(palette: &[Color]) -> anyhow::Result<()> {
    for (i, &c) in palette.iter().enumerate() {
        println!("{}", palette_line(i, c));
    }
    Ok(())
}
