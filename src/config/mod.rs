//! TOML configuration loading.
//!
//! The file may put options at the top level or under a `[logger]` table and
//! only needs to state what it overrides; defaults are merged in before the
//! full option validation runs. A typo'd level or a non-boolean flag still
//! fails loading instead of silently producing a half-configured logger.

use crate::options::LoggerOptions;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Loads options from the default location under the user's config directory.
///
/// A missing file yields the documented defaults; a present but invalid file
/// is an error, matching the all-or-nothing validation contract.
///
/// # Errors
/// Fails if the config directory can't be determined, the file can't be read
/// or parsed, or the options fail validation.
pub fn load() -> Result<LoggerOptions, crate::Error> {
    load_from(&config_path()?)
}

/// Loads options from an explicit path instead of the default location.
///
/// # Errors
/// Same failure modes as [`load`], minus config-directory resolution.
pub fn load_from(path: &Path) -> Result<LoggerOptions, crate::Error> {
    if !path.exists() {
        return Ok(LoggerOptions::default());
    }

    let content = fs::read_to_string(path)?;
    let document: Table = toml::from_str(&content)?;
    let mut table = match document.get("logger") {
        Some(Value::Table(logger)) => logger.clone(),
        _ => document,
    };
    merge_defaults(&mut table);
    LoggerOptions::from_table(&table).map_err(crate::Error::from)
}

/// XDG-compliant path under the platform's config directory.
///
/// # Errors
/// Fails when the platform has no concept of a config directory.
pub fn config_path() -> Result<PathBuf, crate::Error> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("scopelog").join("scopelog.toml"))
        .ok_or(crate::Error::ConfigDirNotFound)
}

/// The host-layer merge: a config file states only what it overrides, so the
/// required fields are seeded from the documented defaults before validation.
/// The optional fields need no seeding; the validator default-fills them.
/// Raw tables handed straight to `LoggerOptions::from_table` skip this merge
/// and must carry the required fields themselves.
fn merge_defaults(table: &mut Table) {
    let defaults = LoggerOptions::default();
    table
        .entry("level")
        .or_insert(Value::String(defaults.level.to_string()));
    table
        .entry("is_enabled")
        .or_insert(Value::Boolean(defaults.is_enabled));
}
