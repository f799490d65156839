//! Best-effort inference of the calling function's name from backtrace text.
//!
//! Frame text is toolchain dependent, so everything here degrades to an
//! empty string rather than failing the log call. The strategy sits behind
//! [`CallerResolver`] so platforms without symbolized backtraces can swap in
//! [`NoopResolver`] without touching the rest of the pipeline.

use std::backtrace::Backtrace;

/// `Send + Sync` bounds let scoped loggers share one resolver behind an `Arc`.
pub trait CallerResolver: Send + Sync {
    /// Returns the caller's name, `explicit` being the instance's stored
    /// override to consult when the inferred frame is compiler glue.
    /// Never fails; returns an empty string when nothing usable is found.
    fn resolve(&self, explicit: Option<&str>) -> String;
}

/// Parses `std::backtrace` display output.
///
/// The walk skips every frame until this crate's own symbols appear, then
/// takes the first frame that belongs to neither the crate nor the runtime.
/// `extra_skip` exists because the number of wrapper frames between the
/// capture point and the true call site depends on inlining; it is a knob to
/// verify per deployment, not a portable constant.
#[derive(Debug, Clone)]
pub struct BacktraceResolver {
    crate_marker: &'static str,
    extra_skip: usize,
}

impl Default for BacktraceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BacktraceResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            crate_marker: "scopelog",
            extra_skip: 0,
        }
    }

    /// Skips additional frames when the caller wraps the logger in its own helper layer.
    #[must_use]
    pub const fn extra_skip(mut self, frames: usize) -> Self {
        self.extra_skip = frames;
        self
    }

    /// Tests feed synthetic traces whose "own" frames carry a different prefix.
    #[must_use]
    pub const fn crate_marker(mut self, marker: &'static str) -> Self {
        self.crate_marker = marker;
        self
    }

    /// Pure extraction over trace text, separated from capture so tests can
    /// pin the heuristic against fixed inputs.
    #[must_use]
    pub fn extract(&self, trace: &str, explicit: Option<&str>) -> String {
        let frames: Vec<&str> = trace.lines().filter_map(frame_symbol).collect();
        let Some(symbol) = self.caller_frame(&frames) else {
            return String::new();
        };

        let mut path = strip_symbol_hash(symbol);
        let mut was_closure = false;
        while let Some(head) = path.strip_suffix("::{{closure}}") {
            was_closure = true;
            path = head;
        }

        // Closure glue hides the real name; prefer the explicitly stored one.
        if was_closure && let Some(explicit) = explicit {
            return explicit.to_string();
        }

        short_name(path).to_string()
    }

    fn caller_frame<'a>(&self, frames: &[&'a str]) -> Option<&'a str> {
        let mut seen_own = false;
        let mut skip = self.extra_skip;
        for &frame in frames {
            if frame.contains(self.crate_marker) {
                seen_own = true;
                continue;
            }
            if !seen_own || is_runtime_frame(frame) {
                continue;
            }
            if skip > 0 {
                skip -= 1;
                continue;
            }
            return Some(frame);
        }
        None
    }
}

impl CallerResolver for BacktraceResolver {
    fn resolve(&self, explicit: Option<&str>) -> String {
        let trace = Backtrace::force_capture().to_string();
        self.extract(&trace, explicit)
    }
}

/// Strategy for platforms where backtrace text is absent or unsymbolized.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl CallerResolver for NoopResolver {
    fn resolve(&self, explicit: Option<&str>) -> String {
        explicit.unwrap_or_default().to_string()
    }
}

/// Picks the symbol out of a `"   3: path::to::fn"` frame line; location
/// lines (`"at src/..."`) and anything else fall through.
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, rest) = line.trim_start().split_once(": ")?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let symbol = rest.trim();
    (!symbol.is_empty()).then_some(symbol)
}

fn is_runtime_frame(frame: &str) -> bool {
    frame.starts_with("std::")
        || frame.starts_with("core::")
        || frame.starts_with("alloc::")
        || frame.starts_with("__rust")
        || frame.starts_with("rust_begin_unwind")
}

/// Symbols end in a `h<16 hex>` disambiguation hash that means nothing to a human.
fn strip_symbol_hash(symbol: &str) -> &str {
    if let Some((head, tail)) = symbol.rsplit_once("::")
        && tail.len() == 17
        && tail.starts_with('h')
        && tail[1..].bytes().all(|b| b.is_ascii_hexdigit())
    {
        return head;
    }
    symbol
}

/// Drops module qualification, leaving the bare function name.
fn short_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
