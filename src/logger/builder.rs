//! Direct `Logger` construction would require wiring options, resolver, and
//! sink by hand; the builder hides that behind a stepwise API.

use super::{DEFAULT_MODULE_NAME, Logger, gate_table};
use crate::caller::{BacktraceResolver, CallerResolver};
use crate::level::Level;
use crate::options::{LoggerOptions, OptionsError};
use crate::output::{ConsoleSink, Sink};
use std::sync::{Arc, RwLock};

/// Every setter mirrors one option field; `build` runs validation so
/// programmatic construction cannot bypass the option constraints.
pub struct LoggerBuilder {
    options: LoggerOptions,
    module_name: String,
    resolver: Arc<dyn CallerResolver>,
    sink: Arc<dyn Sink>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Defaults match the documented option defaults: enabled, info
    /// threshold, plain prefix with `|`, console sink, backtrace resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            resolver: Arc::new(BacktraceResolver::new()),
            sink: Arc::new(ConsoleSink::new()),
        }
    }

    /// Replaces the whole option set, typically one loaded from config.
    #[must_use]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Master switch; `false` builds an all-no-op instance.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.options.is_enabled = enabled;
        self
    }

    /// Minimum severity that produces output.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.options.level = level;
        self
    }

    /// Serialize arguments to JSON text instead of passing them through.
    #[must_use]
    pub const fn stringify_arguments(mut self, stringify: bool) -> Self {
        self.options.stringify_arguments = stringify;
        self
    }

    /// Include the level name in the rendered prefix.
    #[must_use]
    pub const fn show_log_level(mut self, show: bool) -> Self {
        self.options.show_log_level = show;
        self
    }

    /// Include the inferred calling-method name in the rendered prefix.
    #[must_use]
    pub const fn show_method_name(mut self, show: bool) -> Self {
        self.options.show_method_name = show;
        self
    }

    /// Prefix field delimiter, validated at build time.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    /// Route warn/error/fatal to the colorized error channels.
    #[must_use]
    pub const fn console_colors(mut self, colors: bool) -> Self {
        self.options.show_console_colors = colors;
        self
    }

    /// Module label for the root instance; scopes override it per child.
    #[must_use]
    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Swaps in an alternate caller-name strategy (e.g. `NoopResolver` where
    /// backtraces are unsymbolized).
    #[must_use]
    pub fn resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    /// Swaps in an alternate backend (e.g. `MemorySink` in tests).
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Validates, then freezes the gate table. Invalid options abort setup;
    /// there is no default-filled recovery.
    ///
    /// # Errors
    /// Fails when the options violate a constraint.
    pub fn build(self) -> Result<Logger, OptionsError> {
        self.options.validate()?;
        let enabled = gate_table(&self.options);
        Ok(Logger {
            options: Arc::new(self.options),
            enabled,
            module_name: self.module_name,
            initialized: false,
            method_name: RwLock::new(None),
            resolver: self.resolver,
            sink: self.sink,
        })
    }
}
