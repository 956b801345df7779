//! API layer - public entry points
//!
//! Each pipeline stage can be called on its own; [`evaluate`] composes them
//! and stops at the first failing stage.
//!
//! # Viewing stage logs
//! ```bash
//! # everything at debug level
//! calc "1 + 2" -vv
//!
//! # only the shunting-yard at trace level
//! calc "1 + 2" --log-parser trace
//! ```

use tracing::{debug, error, info, instrument, span, Level};

use crate::core::compiler::{self, Scanner, Sequence, Token};
use crate::core::config::{EvalConfig, Phase};
use crate::core::logger::is_enabled;
use crate::core::runtime;

pub use error::{CalcError, ErrorKind, ErrorReport, EvalError, ParseError, ScanError};
pub use types::{Trace, TraceSummary};

mod error;
mod types;

// ==================== Single stages ====================

/// Scan source text into tokens
///
/// # Errors
/// `ScanError::UnknownCharacter` on a character outside the grammar,
/// `ScanError::LiteralOverflow` for an out-of-range literal when the
/// overflow policy rejects it.
#[instrument(target = "calc::scanner", skip(source, config), fields(len = source.len()))]
pub fn scan(source: &str, config: &EvalConfig) -> Result<Vec<Token>, CalcError> {
    let tokens = Scanner::with_policy(source, config.overflow).scan_all()?;

    if is_enabled(Phase::Scanner) {
        debug!(target: "calc::scanner", tokens = %Sequence(&tokens), "Scan completed");
    }
    Ok(tokens)
}

/// Mark unary minus tokens
#[instrument(target = "calc::resolver", skip(tokens), fields(count = tokens.len()))]
pub fn resolve(tokens: Vec<Token>) -> Vec<Token> {
    let tokens = compiler::resolved(tokens);

    if is_enabled(Phase::Resolver) {
        debug!(target: "calc::resolver", tokens = %Sequence(&tokens), "Minus resolved");
    }
    tokens
}

/// Convert a resolved infix sequence to postfix
///
/// # Errors
/// `ParseError::MismatchedParenthesis` on unbalanced parentheses
#[instrument(target = "calc::parser", skip(tokens), fields(count = tokens.len()))]
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let postfix = compiler::to_postfix(tokens)?;

    if is_enabled(Phase::Parser) {
        debug!(target: "calc::parser", postfix = %Sequence(&postfix), "Postfix produced");
    }
    Ok(postfix)
}

/// Evaluate a postfix sequence
///
/// # Errors
/// Any [`EvalError`]
#[instrument(target = "calc::eval", skip(tokens, config), fields(count = tokens.len()))]
pub fn eval_postfix(tokens: &[Token], config: &EvalConfig) -> Result<i64, CalcError> {
    match runtime::eval_postfix(tokens, config) {
        Ok(value) => {
            debug!(target: "calc::eval", value, "Evaluation completed");
            Ok(value)
        }
        Err(e) => {
            debug!(target: "calc::eval", error = %e, "Evaluation failed");
            Err(e.into())
        }
    }
}

// ==================== Pipelines ====================

/// Evaluate an infix expression with the default policies
///
/// ```
/// assert_eq!(infix_calc::evaluate("2 + 3 * 4"), Ok(14));
/// ```
pub fn evaluate(source: &str) -> Result<i64, CalcError> {
    evaluate_with(source, &EvalConfig::default())
}

/// Evaluate an infix expression
///
/// Scanner -> minus resolver -> shunting-yard -> evaluator. The first
/// failing stage's error is returned unchanged.
pub fn evaluate_with(source: &str, config: &EvalConfig) -> Result<i64, CalcError> {
    trace(source, config).map(|t| t.value)
}

/// Evaluate and keep every intermediate sequence
pub fn trace(source: &str, config: &EvalConfig) -> Result<Trace, CalcError> {
    let _span = span!(Level::INFO, "evaluate").entered();

    let result = run_pipeline(source, config);
    match &result {
        Ok(t) => info!(value = t.value, "Evaluation succeeded"),
        Err(e) => error!(phase = e.phase(), error = %e, "Evaluation failed"),
    }
    result
}

fn run_pipeline(source: &str, config: &EvalConfig) -> Result<Trace, CalcError> {
    let tokens = scan(source, config)?;
    let resolved = resolve(tokens.clone());
    let postfix = to_postfix(&resolved)?;
    let value = eval_postfix(&postfix, config)?;

    Ok(Trace {
        tokens,
        resolved,
        postfix,
        value,
    })
}

/// Evaluate text that is already in postfix form (`"1 2 +"`)
///
/// No minus resolution and no shunting-yard: every `-` is binary.
pub fn evaluate_postfix(source: &str, config: &EvalConfig) -> Result<i64, CalcError> {
    let _span = span!(Level::INFO, "evaluate_postfix").entered();

    let tokens = scan(source, config)?;
    eval_postfix(&tokens, config)
}
