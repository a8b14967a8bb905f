//! Convert an audio file into unsigned 8-bit PCM.
//!
//! See [`pcmvert`] documentation for more information.
//!
//! [`pcmvert`]: https://crates.io/crates/pcmvert

use anyhow::Result;
use clap::Parser;

/// Convert an audio file into unsigned 8-bit PCM using ffmpeg.
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80)]
pub struct Opts {
    #[command(flatten)]
    inner: pcmvert::cli::Pcmvert,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    pcmvert::cli::entry(&opts.inner)
}
