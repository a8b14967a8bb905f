use core::fmt;

/// The channel layout of the converted file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Channels {
    #[default]
    Mono,
    Stereo,
}

impl Channels {
    /// Pick a layout from the `--stereo` flag.
    #[inline]
    pub fn from_stereo(stereo: bool) -> Self {
        if stereo {
            Channels::Stereo
        } else {
            Channels::Mono
        }
    }

    /// The number of channels, as passed to `-ac`.
    #[inline]
    pub fn count(&self) -> u8 {
        match self {
            Channels::Mono => 1,
            Channels::Stereo => 2,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Channels::Mono => "mono",
            Channels::Stereo => "stereo",
        }
    }
}

impl fmt::Display for Channels {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.count().fmt(f)
    }
}
