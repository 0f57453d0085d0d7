// crates/pal16-cli/src/cmd/inspect.rs

use clap::Args;
use pal16_core::palette::{palette_id_hex, PALETTE, PALETTE_LEN};

use crate::io::bin;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .p16q file
    #[arg(long)]
    pub r#in: String,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let indices = bin::read_p16q_file(&args.r#in)?;

    let mut h = [0u64; PALETTE_LEN];
    for &i in &indices {
        h[i as usize] += 1;
    }
    let n = indices.len() as u64;

    println!("file        = {}", args.r#in);
    println!("palette_id  = {}", palette_id_hex());
    println!("count       = {}", n);
    println!("distinct    = {}/{}", h.iter().filter(|&&c| c > 0).count(), PALETTE_LEN);
    for (i, &c) in h.iter().enumerate() {
        if c == 0 {
            continue;
        }
        let pct = (c as f64) * 100.0 / (n as f64);
        println!(
            "index={:>2} #{} count={} ({:.3}%)",
            i,
            PALETTE[i].to_hex6(),
            c,
            pct
        );
    }
    Ok(())
}
