//! `scopelog` - Leveled, scope-prefixed console logging facade.
//!
//! A small logging facade with:
//! - Severity threshold filtering decided once at construction
//! - Scoped child loggers carrying a module-name prefix
//! - Optional calling-method inference from backtrace text
//! - Optional JSON stringification of arguments
//! - Color-coded routing of warn/error/fatal to the error channels
//!
//! # Example
//!
//! ```
//! use scopelog::{Level, Logger};
//! use serde_json::json;
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .show_log_level(true)
//!     .build()?;
//!
//! let auth = logger.scope("auth");
//! auth.info(&[json!("user signed in")]);
//! auth.warn(&[json!("token close to expiry")]);
//! # Ok::<(), scopelog::OptionsError>(())
//! ```

pub mod caller;
pub mod config;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod options;
pub mod output;

mod error;

// Re-exports for convenience
pub use caller::{BacktraceResolver, CallerResolver, NoopResolver};
pub use error::Error;
pub use global::{get, install, install_from_config};
pub use level::Level;
pub use logger::{DEFAULT_MODULE_NAME, Logger, LoggerBuilder};
pub use options::{LoggerOptions, OptionsError};
pub use output::{Channel, ConsoleSink, MemorySink, Sink};
