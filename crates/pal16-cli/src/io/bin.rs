// crates/pal16-cli/src/io/bin.rs

use anyhow::Context;
use pal16_core::format as p16q;

/// Write palette indices as a .p16q container (see pal16_core::format).
pub fn write_p16q_file(path: &str, indices: &[u8]) -> anyhow::Result<()> {
    let bytes = p16q::encode(indices)?;
    std::fs::write(path, bytes).with_context(|| format!("write p16q: {path}"))?;
    log::info!("wrote {} indices to {}", indices.len(), path);
    Ok(())
}

pub fn read_p16q_file(path: &str) -> anyhow::Result<Vec<u8>> {
    let bytes = std::fs::read(path).with_context(|| format!("read p16q {path}"))?;
    let indices = p16q::decode(&bytes).with_context(|| format!("decode p16q {path}"))?;
    Ok(indices)
}
