use core::cell::Cell;
use core::fmt;

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

/// Log through an [`Out`]. The `o => v` form only prints in verbose mode.
macro_rules! __log {
    ($log:ident, $o:ident => v, $($tt:tt)*) => {
        if $o.is_verbose() {
            $o.$log(format_args!($($tt)*))?;
        }
    };
    ($log:ident, $o:ident, $($tt:tt)*) => {
        $o.$log(format_args!($($tt)*))?;
    };
}

pub(crate) use __log;

macro_rules! __blank { ($($tt:tt)*) => { $crate::out::__log!(blank, $($tt)*) }; }
macro_rules! __info { ($($tt:tt)*) => { $crate::out::__log!(info, $($tt)*) }; }
macro_rules! __warn { ($($tt:tt)*) => { $crate::out::__log!(warn, $($tt)*) }; }

pub(crate) use __blank as blank;
pub(crate) use __info as info;
pub(crate) use __warn as warn;

pub(crate) struct Colors {
    info: ColorSpec,
    warn: ColorSpec,
}

impl Colors {
    pub(crate) fn new() -> Self {
        let mut info = ColorSpec::new();
        info.set_fg(Some(Color::Green)).set_bold(true);

        let mut warn = ColorSpec::new();
        warn.set_fg(Some(Color::Yellow)).set_bold(true);

        Colors { info, warn }
    }
}

pub(crate) struct Out<'a> {
    verbose: bool,
    change: usize,
    indent: &'a Cell<usize>,
    c: &'a Colors,
    o: &'a mut dyn WriteColor,
}

impl Out<'_> {
    pub(crate) fn new<'a>(
        verbose: bool,
        indent: &'a Cell<usize>,
        c: &'a Colors,
        o: &'a mut dyn WriteColor,
    ) -> Out<'a> {
        Out {
            verbose,
            change: 0,
            indent,
            c,
            o,
        }
    }
}

impl<'a> Out<'a> {
    #[inline]
    pub(crate) fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Indent all output until the returned scope is dropped.
    pub(crate) fn indent(&mut self, change: usize) -> Out<'_> {
        self.indent.set(self.indent.get().saturating_add(change));

        Out {
            verbose: self.verbose,
            change,
            indent: self.indent,
            c: self.c,
            o: self.o,
        }
    }

    pub(crate) fn blank(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        writeln!(self.o, "{m}")?;
        self.o.flush()?;
        Ok(())
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        let c = self.c;
        self.colorize(&c.info, m)
    }

    pub(crate) fn warn(&mut self, m: impl fmt::Display) -> io::Result<()> {
        let c = self.c;
        self.colorize(&c.warn, m)
    }

    fn prefix(&mut self) -> io::Result<()> {
        for _ in 0..self.indent.get() {
            self.o.write_all(b"  ")?;
        }

        Ok(())
    }

    fn colorize(&mut self, c: &ColorSpec, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        self.o.set_color(c)?;
        writeln!(self.o, "{m}")?;
        self.o.reset()?;
        self.o.flush()?;
        Ok(())
    }
}

impl Drop for Out<'_> {
    #[inline]
    fn drop(&mut self) {
        self.indent.set(self.indent.get().saturating_sub(self.change));
    }
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;

    fn render(verbose: bool) -> io::Result<String> {
        let indent = Cell::new(0);
        let cols = Colors::new();
        let mut buf = NoColor::new(Vec::new());

        {
            let mut o = Out::new(verbose, &indent, &cols, &mut buf);
            info!(o, "Converting");

            {
                let mut o = o.indent(1);
                blank!(o, "from : {}", "a.wav");
                blank!(o => v, "to   : {}", "b.wav");
            }

            warn!(o => v, "done");
        }

        assert_eq!(indent.get(), 0);
        Ok(String::from_utf8(buf.into_inner()).expect("utf-8 output"))
    }

    #[test]
    fn indentation() -> io::Result<()> {
        assert_eq!(
            render(true)?,
            "Converting\n  from : a.wav\n  to   : b.wav\ndone\n"
        );
        Ok(())
    }

    #[test]
    fn verbose_only_lines_are_hidden() -> io::Result<()> {
        assert_eq!(render(false)?, "Converting\n  from : a.wav\n");
        Ok(())
    }
}
