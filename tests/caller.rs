//! Tests for caller-name extraction from backtrace text.
//!
//! All inputs are synthetic traces so the heuristic is pinned against fixed
//! text instead of whatever the running toolchain produces.

use scopelog::{BacktraceResolver, CallerResolver, NoopResolver};

const PLAIN_TRACE: &str = "\
   0: std::backtrace_rs::backtrace::trace\n\
   1: std::backtrace::Backtrace::force_capture\n\
   2: scopelog::caller::BacktraceResolver::resolve\n\
   3: scopelog::logger::Logger::log\n\
   4: scopelog::logger::Logger::warn\n\
   5: myapp::auth::login::h0123456789abcdef\n\
   6: myapp::main\n";

#[test]
fn extracts_bare_function_name() {
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(PLAIN_TRACE, None), "login");
}

#[test]
fn location_lines_are_ignored() {
    let trace = "\
   2: scopelog::logger::Logger::log\n\
             at src/logger/mod.rs:60:9\n\
   3: myapp::auth::login::h0123456789abcdef\n\
             at src/auth.rs:10:5\n";
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(trace, None), "login");
}

#[test]
fn symbol_hash_is_stripped_only_when_it_looks_like_one() {
    let trace = "\
   1: scopelog::logger::Logger::log\n\
   2: myapp::handle\n";
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(trace, None), "handle");

    // A short trailing segment that merely starts with 'h' is a real name.
    let trace = "\
   1: scopelog::logger::Logger::log\n\
   2: myapp::http\n";
    assert_eq!(resolver.extract(trace, None), "http");
}

#[test]
fn closure_frame_falls_back_to_explicit_name() {
    let trace = "\
   1: scopelog::logger::Logger::log\n\
   2: myapp::server::handle::{{closure}}::h0123456789abcdef\n";
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(trace, Some("handle_request")), "handle_request");
}

#[test]
fn closure_frame_without_explicit_name_uses_enclosing_function() {
    let trace = "\
   1: scopelog::logger::Logger::log\n\
   2: myapp::server::handle::{{closure}}::{{closure}}\n";
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(trace, None), "handle");
}

#[test]
fn runtime_frames_after_own_are_skipped() {
    let trace = "\
   1: scopelog::logger::Logger::log\n\
   2: core::ops::function::FnOnce::call_once\n\
   3: std::panicking::try\n\
   4: myapp::worker::run\n";
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(trace, None), "run");
}

#[test]
fn extra_skip_moves_past_wrapper_frames() {
    let trace = "\
   1: scopelog::logger::Logger::log\n\
   2: myapp::logging_shim::forward\n\
   3: myapp::auth::login\n";
    let resolver = BacktraceResolver::new().extra_skip(1);
    assert_eq!(resolver.extract(trace, None), "login");
}

#[test]
fn empty_trace_degrades_to_empty_string() {
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract("", None), "");
    assert_eq!(resolver.extract("disabled backtrace", None), "");
}

#[test]
fn trace_without_own_frames_degrades_to_empty_string() {
    // Nothing marks the capture point, so no frame can be trusted as the caller.
    let trace = "   0: myapp::main\n";
    let resolver = BacktraceResolver::new();
    assert_eq!(resolver.extract(trace, None), "");
}

#[test]
fn custom_marker_is_honored() {
    let trace = "\
   1: otherlog::inner::capture\n\
   2: myapp::main\n";
    let resolver = BacktraceResolver::new().crate_marker("otherlog");
    assert_eq!(resolver.extract(trace, None), "main");
}

#[test]
fn noop_resolver_returns_explicit_or_empty() {
    assert_eq!(NoopResolver.resolve(Some("handler")), "handler");
    assert_eq!(NoopResolver.resolve(None), "");
}
