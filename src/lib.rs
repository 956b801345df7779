//! infix-calc - integer arithmetic calculator
//!
//! Evaluates infix expressions over `i64` with `+ - * /`, parentheses and
//! unary minus. The expression goes through four stages: scanner, minus
//! resolver, shunting-yard, postfix evaluator.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── api/       - Public API layer (input → output)
//! ├── core/      - Pure pipeline logic (no IO)
//! └── platform/  - IO adapters (CLI formatting, REPL)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use infix_calc::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("6 * 5 - (1 * 2 + 3 * 4)"), Ok(16));
//! assert_eq!(evaluate("1 / 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
//! ```

// Pure logic, no IO
pub mod core;

// Public entry points
pub mod api;

// IO adapters
pub mod platform;

pub use api::{evaluate, evaluate_postfix, evaluate_with, trace, CalcError, Trace, TraceSummary};
pub use api::{ErrorKind, ErrorReport, EvalError, ParseError, ScanError};
pub use crate::core::compiler::Token;
pub use crate::core::{
    config::config, config::init as init_config, logger::init_logger, logger::LogFormat, Config,
    EvalConfig, LogConfig, OverflowPolicy, Phase, StackPolicy,
};

/// Initialise the global configuration
///
/// Does not touch logging; the CLI sets that up itself.
///
/// # Example
/// ```ignore
/// use infix_calc::{init, Config};
///
/// init(Config::default());
/// ```
pub fn init(config: Config) {
    core::config::init(config);
}

/// Initialise the configuration and the logger
///
/// # Example
/// ```ignore
/// use infix_calc::{init_with_logger, Config, LogFormat};
///
/// init_with_logger(Config::default(), LogFormat::Compact);
/// ```
pub fn init_with_logger(config: Config, format: LogFormat) {
    core::config::init(config);
    core::logger::init_with_format(format);
}

/// Evaluate with the global configuration's policies
///
/// Initialises the default configuration on first use.
pub fn quick_eval(source: &str) -> Result<i64, CalcError> {
    evaluate_with(source, &core::config::get_or_default().eval)
}
