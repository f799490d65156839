//! Process-wide installation surface.
//!
//! The host-integration layer installs one validated root logger at startup
//! and every component reaches it through [`get`]. `OnceLock` makes the
//! first successful install win, even if multiple entry points race.

use crate::logger::Logger;
use crate::options::LoggerOptions;
use std::sync::OnceLock;

static ROOT: OnceLock<Logger> = OnceLock::new();

/// Installs the root logger. Validation runs before any global state is
/// touched, so a failed install leaves nothing behind. A repeated install
/// keeps the existing root and returns it.
///
/// # Errors
/// Fails when the options are invalid; setup must not proceed.
pub fn install(options: LoggerOptions) -> Result<&'static Logger, crate::Error> {
    let logger = Logger::from_options(options)?;
    Ok(ROOT.get_or_init(|| logger))
}

/// Installs the root logger from the user's config file.
///
/// # Errors
/// Config loading and validation failures, as with [`install`].
pub fn install_from_config() -> Result<&'static Logger, crate::Error> {
    install(crate::config::load()?)
}

/// The accessor components call instead of threading the instance through
/// every signature. `None` until a successful [`install`].
#[must_use]
pub fn get() -> Option<&'static Logger> {
    ROOT.get()
}
