//! [<img alt="github" src="https://img.shields.io/badge/github-udoprog/mediavert-8da0cb?style=for-the-badge&logo=github" height="20">](https://github.com/udoprog/mediavert)
//! [<img alt="crates.io" src="https://img.shields.io/crates/v/pcmvert.svg?style=for-the-badge&color=fc8d62&logo=rust" height="20">](https://crates.io/crates/pcmvert)
//!
//! Convert an audio file into unsigned 8-bit PCM.
//!
//! The conversion itself is performed by `ffmpeg`, this tool only decides what
//! to ask of it. Given an input and an output path it runs:
//!
//! ```text
//! ffmpeg -i <in> -ac <channels> -ar <sample-rate> -c:a pcm_u8 <out>
//! ```
//!
//! Output is mono at `22050Hz` unless `--stereo` or `--sample-rate` says
//! otherwise. The result is suitable for small PWM based WAV players, which
//! typically only understand mono unsigned 8-bit PCM between `8000Hz` and
//! `48000Hz`.
//!
//! <br>
//!
//! ## Usage
//!
//! To see what would be executed without running anything, use `--dry-run` or
//! `-D`:
//!
//! ```sh
//! pcmvert --dry-run song.mp3 song.wav
//! ```
//!
//! Once this looks good, run the command without `--dry-run`:
//!
//! ```sh
//! pcmvert -s 16000 song.mp3 song.wav
//! ```
//!
//! The exit status of `ffmpeg` is not inspected unless `--check` is passed, in
//! which case a failed conversion makes the tool exit with an error.

mod channels;
pub mod cli;
mod out;
mod player;
mod request;
mod shell;

pub use self::channels::Channels;
pub use self::request::Request;
