//! Builds the prefixed message text that sinks emit.
//!
//! Arguments are opaque `serde_json::Value`s: the contract is pass-through or
//! JSON stringification, nothing stronger.

mod color;

pub use color::{Color, colorize};

use crate::level::Level;
use crate::options::LoggerOptions;
use serde_json::Value;

/// Substituted for an argument whose serialization fails, so one bad value
/// can't abort the whole log call.
pub const UNSERIALIZABLE: &str = "<unserializable>";

/// Assembles `module | level | caller | ` according to the option toggles.
///
/// `caller` is `Some` exactly when method-name display is on; an empty
/// inferred name still gets its separator slot, keeping column positions
/// stable across calls that do and don't resolve.
#[must_use]
pub fn render_prefix(
    options: &LoggerOptions,
    module_name: &str,
    level: Level,
    caller: Option<&str>,
) -> String {
    let sep = format!(" {} ", options.separator);
    let mut prefix = String::new();

    if !module_name.is_empty() {
        prefix.push_str(module_name);
        prefix.push_str(&sep);
    }
    if options.show_log_level {
        prefix.push_str(level.as_str());
        prefix.push_str(&sep);
    }
    if let Some(caller) = caller {
        prefix.push_str(caller);
        prefix.push_str(&sep);
    }

    prefix
}

/// Renders each argument to text: JSON when stringification is on, otherwise
/// pass-through display where strings stay bare instead of gaining quotes.
#[must_use]
pub fn render_args(options: &LoggerOptions, args: &[Value]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if options.stringify_arguments {
                serde_json::to_string(arg).unwrap_or_else(|_| UNSERIALIZABLE.to_string())
            } else {
                display_value(arg)
            }
        })
        .collect()
}

/// The full line a sink writes, and also the informational return value of a log call.
#[must_use]
pub fn render_line(prefix: &str, rendered_args: &[String]) -> String {
    format!("{prefix}{}", rendered_args.join(" "))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
