//! Logger configuration and its validation.
//!
//! Options arrive either as a typed struct (programmatic use) or as a raw
//! TOML table (config files, host-layer merging). The raw path runs the full
//! field-by-field validation; the typed path only needs the separator check
//! since the type system already enforces the rest.

use crate::level::Level;
use serde::Deserialize;
use std::fmt;
use toml::Table;

/// Prefix delimiters longer than this make the rendered line unreadable.
pub const MAX_SEPARATOR_LEN: usize = 3;

/// Immutable once a logger is built; instances hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Master switch; `false` disables every level regardless of threshold.
    pub is_enabled: bool,
    /// Minimum severity that produces output.
    pub level: Level,
    /// Serialize each argument to JSON text instead of passing it through.
    pub stringify_arguments: bool,
    /// Include the level name in the rendered prefix.
    pub show_log_level: bool,
    /// Include the inferred calling-method name in the rendered prefix.
    pub show_method_name: bool,
    /// Delimiter joining prefix fields, at most [`MAX_SEPARATOR_LEN`] characters.
    pub separator: String,
    /// Route warn/error/fatal to the colorized error channels.
    pub show_console_colors: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            is_enabled: true,
            level: Level::Info,
            stringify_arguments: false,
            show_log_level: false,
            show_method_name: false,
            separator: "|".to_string(),
            show_console_colors: false,
        }
    }
}

impl LoggerOptions {
    /// Validation is all-or-nothing: the first violated check wins and no
    /// default-filled recovery happens. Check order matches the documented
    /// option contract, so error messages are stable across releases.
    ///
    /// # Errors
    /// Returns the first violated constraint; the caller must abort setup.
    pub fn from_table(table: &Table) -> Result<Self, OptionsError> {
        let level = match table.get("level") {
            None => return Err(OptionsError::MissingLevel),
            Some(value) => {
                let Some(text) = value.as_str() else {
                    return Err(OptionsError::LevelNotAString);
                };
                text.parse::<Level>()
                    .map_err(|_| OptionsError::UnknownLevel(text.to_string()))?
            }
        };

        let stringify_arguments = optional_bool(table, "stringify_arguments")?;
        let show_log_level = optional_bool(table, "show_log_level")?;
        let show_console_colors = optional_bool(table, "show_console_colors")?;

        let separator = match table.get("separator") {
            None => None,
            Some(value) => {
                let Some(text) = value.as_str() else {
                    return Err(OptionsError::SeparatorNotAString);
                };
                if text.chars().count() > MAX_SEPARATOR_LEN {
                    return Err(OptionsError::SeparatorTooLong(text.to_string()));
                }
                Some(text.to_string())
            }
        };

        // Unlike the rest, the master switch is required.
        let is_enabled = match table.get("is_enabled") {
            None => return Err(OptionsError::MissingEnabled),
            Some(value) => value
                .as_bool()
                .ok_or(OptionsError::NotABoolean("is_enabled"))?,
        };

        let show_method_name = optional_bool(table, "show_method_name")?;

        let defaults = Self::default();
        Ok(Self {
            is_enabled,
            level,
            stringify_arguments: stringify_arguments.unwrap_or(defaults.stringify_arguments),
            show_log_level: show_log_level.unwrap_or(defaults.show_log_level),
            show_method_name: show_method_name.unwrap_or(defaults.show_method_name),
            separator: separator.unwrap_or(defaults.separator),
            show_console_colors: show_console_colors.unwrap_or(defaults.show_console_colors),
        })
    }

    /// The separator bound is the one constraint the typed struct cannot
    /// enforce on its own; the builder calls this so programmatic
    /// construction goes through the same gate as config files.
    ///
    /// # Errors
    /// Fails when the separator exceeds [`MAX_SEPARATOR_LEN`] characters.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.separator.chars().count() > MAX_SEPARATOR_LEN {
            return Err(OptionsError::SeparatorTooLong(self.separator.clone()));
        }
        Ok(())
    }
}

fn optional_bool(table: &Table, key: &'static str) -> Result<Option<bool>, OptionsError> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or(OptionsError::NotABoolean(key)),
    }
}

/// Names the violated field so integrators can fix the config instead of
/// guessing which of seven options was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `level` is required.
    MissingLevel,
    /// `level` must be a string.
    LevelNotAString,
    /// `level` is not a member of the severity enumeration.
    UnknownLevel(String),
    /// A boolean-typed field was supplied with a different type.
    NotABoolean(&'static str),
    /// `separator` must be a string.
    SeparatorNotAString,
    /// `separator` exceeds the length bound.
    SeparatorTooLong(String),
    /// `is_enabled` is required.
    MissingEnabled,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLevel => write!(f, "invalid logger options: 'level' is missing"),
            Self::LevelNotAString => {
                write!(f, "invalid logger options: 'level' must be a string")
            }
            Self::UnknownLevel(level) => {
                write!(f, "invalid logger options: unknown level '{level}'")
            }
            Self::NotABoolean(field) => {
                write!(f, "invalid logger options: '{field}' must be a boolean")
            }
            Self::SeparatorNotAString => {
                write!(f, "invalid logger options: 'separator' must be a string")
            }
            Self::SeparatorTooLong(separator) => write!(
                f,
                "invalid logger options: separator '{separator}' exceeds {MAX_SEPARATOR_LEN} characters"
            ),
            Self::MissingEnabled => {
                write!(f, "invalid logger options: 'is_enabled' is missing")
            }
        }
    }
}

impl std::error::Error for OptionsError {}
