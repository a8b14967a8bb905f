use core::cell::Cell;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::channels::Channels;
use crate::out::{Colors, Out, blank, info, warn};
use crate::player;
use crate::request::Request;
use crate::shell::{self, FormatCommand};

const FFMPEG: &str = "ffmpeg";

/// Convert an audio file into unsigned 8-bit PCM using ffmpeg.
#[derive(Parser)]
pub struct Pcmvert {
    /// Sample rate of the converted file in Hz.
    #[arg(short = 's', long, default_value_t = Request::DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
    /// If set, the converted file has two channels instead of one.
    #[arg(short = 'S', long)]
    stereo: bool,
    /// If set, enables verbose output. This prints the ffmpeg command before
    /// running it, and warns about output the WAV player can't play back.
    #[arg(short = 'v', long)]
    verbose: bool,
    /// If set, prints the ffmpeg command without running it. This also implies
    /// verbose.
    #[arg(short = 'D', long)]
    dry_run: bool,
    /// If set, exits with an error if ffmpeg fails. By default the exit status
    /// of ffmpeg is ignored.
    #[arg(long)]
    check: bool,
    /// Path to ffmpeg binary to use when performing the conversion.
    #[arg(long, default_value = FFMPEG)]
    ffmpeg_bin: PathBuf,
    /// The file to convert.
    #[arg(value_name = "IN")]
    input: PathBuf,
    /// Where to write the converted file.
    #[arg(value_name = "OUT")]
    output: PathBuf,
}

impl Pcmvert {
    fn request(&self) -> Request {
        Request::new(&self.input, &self.output)
            .with_sample_rate(self.sample_rate)
            .with_channels(Channels::from_stereo(self.stereo))
    }

    fn config(&self) -> Config {
        Config {
            ffmpeg: self.ffmpeg_bin.clone(),
            dry_run: self.dry_run,
            verbose: self.verbose || self.dry_run,
            check: self.check,
        }
    }
}

/// How the conversion is carried out.
struct Config {
    ffmpeg: PathBuf,
    dry_run: bool,
    verbose: bool,
    check: bool,
}

/// Entry for `pcmvert`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Pcmvert) -> Result<()> {
    // Current indentation level for output.
    let indent = Cell::new(0);

    let request = opts.request();
    let config = opts.config();

    let cols = Colors::new();

    let o = StandardStream::stdout(ColorChoice::Auto);
    let mut o = o.lock();
    let mut o = Out::new(config.verbose, &indent, &cols, &mut o);
    run(&mut o, &config, &request)
}

fn run(o: &mut Out<'_>, config: &Config, request: &Request) -> Result<()> {
    let mut cmd = request.command(&config.ffmpeg);

    info!(
        o => v,
        "Converting to {} pcm_u8 at {}Hz",
        request.channels().name(),
        request.sample_rate()
    );

    {
        let mut o = o.indent(1);
        blank!(o => v, "from : {}", shell::escape(request.input().as_os_str()));
        blank!(o => v, "to   : {}", shell::escape(request.output().as_os_str()));

        for problem in player::check(request) {
            warn!(o => v, "Not playable: {problem}");
        }

        blank!(o => v, "{}", FormatCommand::new(&cmd));
    }

    if config.dry_run {
        return Ok(());
    }

    let ffmpeg = shell::escape(config.ffmpeg.as_os_str());

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {ffmpeg}"))?;

    if !status.success() {
        if config.check {
            bail!("{ffmpeg} failed: {status}");
        }

        warn!(o => v, "{ffmpeg} failed: {status}");
    }

    Ok(())
}
