//! Console channels and the sink seam.
//!
//! The built-in console sink can't cover every environment (tests, embedded
//! hosts, captured output); the `Sink` trait lets callers substitute their
//! own backend without modifying scopelog itself.

mod console;
mod memory;

pub use console::ConsoleSink;
pub use memory::MemorySink;

use crate::level::Level;

/// The three console channels the platform provides. There is no fatal
/// channel; fatal severity borrows the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Generic output channel; every level lands here unless color routing applies.
    Log,
    Warn,
    Error,
}

impl Channel {
    /// Color routing only diverts warn and above; with colors off every
    /// level uses the generic channel regardless of severity.
    #[must_use]
    pub const fn for_level(level: Level, console_colors: bool) -> Self {
        if !console_colors {
            return Self::Log;
        }
        match level {
            Level::Warn => Self::Warn,
            Level::Error | Level::Fatal => Self::Error,
            Level::Debug | Level::Info => Self::Log,
        }
    }
}

/// `Send + Sync` bounds enable concurrent logging from multiple threads without locks on the trait object.
pub trait Sink: Send + Sync {
    /// Emits one rendered line on the given channel.
    ///
    /// # Errors
    /// I/O errors from the underlying stream; log calls ignore them.
    fn write(&self, channel: Channel, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}
