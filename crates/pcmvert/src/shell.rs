use core::fmt;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::process::Command;

/// Escape a single argument so that it can be pasted into bash.
pub(crate) fn escape(s: &OsStr) -> Cow<'_, str> {
    let Some(s) = s.to_str() else {
        return Cow::Borrowed("<non-utf8>");
    };

    if s.is_empty() {
        return Cow::Borrowed("''");
    }

    let Some(n) = s.find(|c: char| escape_in_bash(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut o = String::with_capacity(s.len() + 8);
    o.push_str(&s[..n]);

    for c in s[n..].chars() {
        if let Some(e) = escape_in_bash(c) {
            o.push_str(e);
        } else {
            o.push(c);
        }
    }

    Cow::Owned(o)
}

fn escape_in_bash(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("\\ "),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        '$' => Some("\\$"),
        '`' => Some("\\`"),
        '&' => Some("\\&"),
        '|' => Some("\\|"),
        ';' => Some("\\;"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '!' => Some("\\!"),
        '(' => Some("\\("),
        ')' => Some("\\)"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '*' => Some("\\*"),
        '?' => Some("\\?"),
        _ => None,
    }
}

/// Helper type to display a command the way it would be typed in a shell.
pub(crate) struct FormatCommand<'a> {
    cmd: &'a Command,
}

impl<'a> FormatCommand<'a> {
    #[inline]
    pub(crate) fn new(cmd: &'a Command) -> Self {
        Self { cmd }
    }
}

impl fmt::Display for FormatCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", escape(self.cmd.get_program()))?;

        for arg in self.cmd.get_args() {
            write!(f, " {}", escape(arg))?;
        }

        Ok(())
    }
}
