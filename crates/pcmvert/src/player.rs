//! Limits of the PWM based WAV player which converted files are intended for.

use core::fmt;
use core::ops::RangeInclusive;

use crate::channels::Channels;
use crate::request::Request;

/// Sample rates the player is able to drive its timer at.
pub(crate) const SAMPLE_RATES: RangeInclusive<u32> = 8000..=48000;

/// A reason why the player will refuse a converted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Incompatible {
    Channels(Channels),
    SampleRate(u32),
}

impl fmt::Display for Incompatible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incompatible::Channels(channels) => {
                write!(f, "{} output, the player only supports mono", channels.name())
            }
            Incompatible::SampleRate(rate) => write!(
                f,
                "sample rate {rate}Hz, the player only supports {}Hz to {}Hz",
                SAMPLE_RATES.start(),
                SAMPLE_RATES.end()
            ),
        }
    }
}

/// Check a request against what the player can play back.
pub(crate) fn check(request: &Request) -> Vec<Incompatible> {
    let mut out = Vec::new();

    if request.channels() != Channels::Mono {
        out.push(Incompatible::Channels(request.channels()));
    }

    if !SAMPLE_RATES.contains(&request.sample_rate()) {
        out.push(Incompatible::SampleRate(request.sample_rate()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_playable() {
        assert!(check(&Request::new("a", "b")).is_empty());
    }

    #[test]
    fn edges() {
        for rate in [8000, 48000] {
            let request = Request::new("a", "b").with_sample_rate(rate);
            assert!(check(&request).is_empty(), "{rate}");
        }

        for rate in [0, 7999, 48001, 96000] {
            let request = Request::new("a", "b").with_sample_rate(rate);
            assert_eq!(check(&request), [Incompatible::SampleRate(rate)]);
        }
    }

    #[test]
    fn stereo_and_rate() {
        let request = Request::new("a", "b")
            .with_channels(Channels::Stereo)
            .with_sample_rate(96000);

        let problems = check(&request);

        assert_eq!(
            problems,
            [
                Incompatible::Channels(Channels::Stereo),
                Incompatible::SampleRate(96000)
            ]
        );

        assert_eq!(
            problems[0].to_string(),
            "stereo output, the player only supports mono"
        );
        assert_eq!(
            problems[1].to_string(),
            "sample rate 96000Hz, the player only supports 8000Hz to 48000Hz"
        );
    }
}
