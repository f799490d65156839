//! The logger instance: per-level gate table, scoping, and dispatch.
//!
//! Gate verdicts are computed once at construction. Options live behind an
//! `Arc` and are never touched again, so mutating a configuration source
//! after build cannot change an existing instance's behavior.

mod builder;

pub use builder::LoggerBuilder;

use crate::caller::CallerResolver;
use crate::fmt;
use crate::level::Level;
use crate::options::{LoggerOptions, OptionsError};
use crate::output::{Channel, Sink};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};

/// Root instances carry this until a scope names them.
pub const DEFAULT_MODULE_NAME: &str = "unknown";

/// One logger per scope. Children created by [`Logger::scope`] share the
/// validated options, resolver, and sink, but own their module name and
/// method-name override.
pub struct Logger {
    options: Arc<LoggerOptions>,
    /// Gate verdict per level, indexed by `Level::index`; fixed at construction.
    enabled: [bool; 5],
    module_name: String,
    /// True only for scoped children; gates the explicit method-name fallback.
    initialized: bool,
    /// `RwLock` rather than `RefCell` only so the instance stays `Sync` for
    /// the global accessor; nothing shares it across instances.
    method_name: RwLock<Option<String>>,
    resolver: Arc<dyn CallerResolver>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Direct construction would expose sink and resolver wiring; the builder provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Shorthand for the common case of validated options with default wiring.
    ///
    /// # Errors
    /// Fails when the options violate a constraint.
    pub fn from_options(options: LoggerOptions) -> Result<Self, OptionsError> {
        Self::builder().options(options).build()
    }

    /// Core dispatch. A gated-off level performs no work at all: no caller
    /// resolution, no rendering, no sink write, and a `None` return.
    pub fn log(&self, level: Level, args: &[Value]) -> Option<String> {
        if !self.enabled[level.index()] {
            return None;
        }

        let caller = if self.options.show_method_name {
            Some(self.resolver.resolve(self.explicit_method_name().as_deref()))
        } else {
            None
        };

        let prefix = fmt::render_prefix(&self.options, &self.module_name, level, caller.as_deref());
        let rendered = fmt::render_args(&self.options, args);
        let line = fmt::render_line(&prefix, &rendered);

        // A failing sink must not fail the log call.
        let _ = self
            .sink
            .write(Channel::for_level(level, self.options.show_console_colors), &line);

        Some(line)
    }

    pub fn debug(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Debug, args)
    }

    pub fn info(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Info, args)
    }

    pub fn warn(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Warn, args)
    }

    pub fn error(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Error, args)
    }

    pub fn fatal(&self, args: &[Value]) -> Option<String> {
        self.log(Level::Fatal, args)
    }

    /// Child instance for a named module. Fresh per-instance state, shared
    /// everything else; the parent is untouched.
    #[must_use]
    pub fn scope(&self, name: impl Into<String>) -> Self {
        Self {
            options: Arc::clone(&self.options),
            enabled: self.enabled,
            module_name: name.into(),
            initialized: true,
            method_name: RwLock::new(None),
            resolver: Arc::clone(&self.resolver),
            sink: Arc::clone(&self.sink),
        }
    }

    /// Stores the explicit caller-name override consulted when stack
    /// inference lands on compiler glue.
    pub fn set_method_name(&self, name: impl Into<String>) {
        *self
            .method_name
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(name.into());
    }

    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Tests verify the gate table against the threshold property.
    #[must_use]
    pub const fn level_enabled(&self, level: Level) -> bool {
        self.enabled[level.index()]
    }

    #[must_use]
    pub fn min_level(&self) -> Level {
        self.options.level
    }

    /// The override only applies to instances that went through `scope`.
    fn explicit_method_name(&self) -> Option<String> {
        if !self.initialized {
            return None;
        }
        self.method_name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// The gate decision is made once here, not re-evaluated per call.
pub(crate) fn gate_table(options: &LoggerOptions) -> [bool; 5] {
    Level::all().map(|level| options.is_enabled && level >= options.level)
}
