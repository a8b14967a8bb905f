use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::channels::Channels;

/// The codec requested from ffmpeg, unsigned 8-bit PCM.
pub(crate) const CODEC: &str = "pcm_u8";

/// A single conversion to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    input: PathBuf,
    output: PathBuf,
    sample_rate: u32,
    channels: Channels,
}

impl Request {
    pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

    /// Construct a new mono request at the default sample rate.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            sample_rate: Self::DEFAULT_SAMPLE_RATE,
            channels: Channels::Mono,
        }
    }

    #[inline]
    pub fn with_sample_rate(self, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..self
        }
    }

    #[inline]
    pub fn with_channels(self, channels: Channels) -> Self {
        Self { channels, ..self }
    }

    #[inline]
    pub fn input(&self) -> &Path {
        &self.input
    }

    #[inline]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Arguments to pass to ffmpeg, in order.
    ///
    /// The input is always introduced by the leading `-i` and the output is
    /// always the last argument.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from("-i"),
            self.input.clone().into_os_string(),
            OsString::from("-ac"),
            OsString::from(self.channels.to_string()),
            OsString::from("-ar"),
            OsString::from(self.sample_rate.to_string()),
            OsString::from("-c:a"),
            OsString::from(CODEC),
            self.output.clone().into_os_string(),
        ]
    }

    /// Build the command which performs this conversion using the given ffmpeg
    /// binary.
    pub fn command(&self, ffmpeg: impl AsRef<OsStr>) -> Command {
        let mut cmd = Command::new(ffmpeg);
        cmd.args(self.args());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.into_string().expect("utf-8 argument"))
            .collect()
    }

    #[test]
    fn defaults() {
        let request = Request::new("in.wav", "out.wav");
        assert_eq!(request.sample_rate(), 22050);
        assert_eq!(request.channels(), Channels::Mono);

        assert_eq!(
            strings(request.args()),
            ["-i", "in.wav", "-ac", "1", "-ar", "22050", "-c:a", "pcm_u8", "out.wav"]
        );
    }

    #[test]
    fn custom_sample_rate() {
        let request = Request::new("in.mp3", "out.wav").with_sample_rate(16000);

        assert_eq!(
            strings(request.args()),
            ["-i", "in.mp3", "-ac", "1", "-ar", "16000", "-c:a", "pcm_u8", "out.wav"]
        );
    }

    #[test]
    fn stereo() {
        let request = Request::new("in.mp3", "out.wav").with_channels(Channels::Stereo);

        assert_eq!(
            strings(request.args()),
            ["-i", "in.mp3", "-ac", "2", "-ar", "22050", "-c:a", "pcm_u8", "out.wav"]
        );
    }

    #[test]
    fn paths_are_passed_verbatim() {
        let request = Request::new("my music/-weird.flac", "-out.wav");
        let args = strings(request.args());

        assert_eq!(args[0], "-i");
        assert_eq!(args[1], "my music/-weird.flac");
        assert_eq!(args.last().map(String::as_str), Some("-out.wav"));
    }

    #[test]
    fn command() {
        let request = Request::new("in.wav", "out.wav").with_sample_rate(44100);
        let cmd = request.command("/usr/bin/ffmpeg");

        assert_eq!(cmd.get_program(), "/usr/bin/ffmpeg");

        let args = cmd.get_args().collect::<Vec<_>>();
        let expected = request.args();
        assert_eq!(args, expected.iter().map(OsString::as_os_str).collect::<Vec<_>>());
        assert!(args.windows(2).any(|w| w == ["-ar", "44100"]));
    }
}
