//! Test helpers
//!
//! Shortcuts for end-to-end pipeline tests.

#![allow(dead_code)]

use infix_calc::{evaluate_with, CalcError, ErrorKind, EvalConfig, StackPolicy};

/// Evaluate with the default policies
pub fn run(source: &str) -> Result<i64, CalcError> {
    evaluate_with(source, &EvalConfig::default())
}

/// Evaluate, panicking with the source on failure
pub fn eval_ok(source: &str) -> i64 {
    match run(source) {
        Ok(value) => value,
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

/// Evaluate, panicking with the source on success
pub fn eval_err(source: &str) -> CalcError {
    match run(source) {
        Ok(value) => panic!("{source:?} evaluated to {value}, expected an error"),
        Err(e) => e,
    }
}

/// Error kind of a failing evaluation
pub fn eval_kind(source: &str) -> ErrorKind {
    eval_err(source).kind()
}

/// Policies with [`StackPolicy::Strict`]
pub fn strict() -> EvalConfig {
    EvalConfig {
        stack: StackPolicy::Strict,
        ..Default::default()
    }
}

/// Run a REPL session over `input` and return everything it wrote
pub fn repl_session(input: &str, options: &infix_calc::platform::ReplOptions) -> String {
    repl_session_bytes(input.as_bytes(), options)
}

/// Run a REPL session over raw bytes
pub fn repl_session_bytes(input: &[u8], options: &infix_calc::platform::ReplOptions) -> String {
    let mut out = Vec::new();
    infix_calc::platform::repl::run(input, &mut out, options)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("REPL output is UTF-8")
}
