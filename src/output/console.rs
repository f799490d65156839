//! Default sink writing to the process's stdout/stderr streams.

use super::{Channel, Sink};
use crate::fmt::{Color, colorize};
use std::io::{self, Write};

/// The warn and error channels are only selected by the color-routing path,
/// so this sink colorizes them unconditionally; the generic channel stays plain.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&self, channel: Channel, line: &str) -> Result<(), crate::Error> {
        match channel {
            Channel::Log => writeln!(io::stdout(), "{line}")?,
            Channel::Warn => writeln!(io::stderr(), "{}", colorize(line, Color::yellow()))?,
            Channel::Error => writeln!(io::stderr(), "{}", colorize(line, Color::red()))?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
