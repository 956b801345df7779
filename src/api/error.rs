//! API error types
//!
//! One error type for the whole pipeline plus a structured report.

use serde::Serialize;
use thiserror::Error;

pub use crate::core::compiler::{ParseError, ScanError};
pub use crate::core::runtime::EvalError;

/// Calculator error
///
/// Wraps the error of whichever stage failed first; the message is the
/// stage's own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    UnknownCharacter,
    LiteralOverflow,
    MismatchedParenthesis,
    InsufficientOperands,
    DivisionByZero,
    ArithmeticOverflow,
    LeftoverOperands,
    UnexpectedParenthesis,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Scan(ScanError::UnknownCharacter { .. }) => ErrorKind::UnknownCharacter,
            CalcError::Scan(ScanError::LiteralOverflow { .. }) => ErrorKind::LiteralOverflow,
            CalcError::Parse(ParseError::MismatchedParenthesis) => {
                ErrorKind::MismatchedParenthesis
            }
            CalcError::Eval(EvalError::InsufficientOperands) => ErrorKind::InsufficientOperands,
            CalcError::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            CalcError::Eval(EvalError::ArithmeticOverflow) => ErrorKind::ArithmeticOverflow,
            CalcError::Eval(EvalError::LeftoverOperands(_)) => ErrorKind::LeftoverOperands,
            CalcError::Eval(EvalError::UnexpectedParenthesis) => {
                ErrorKind::UnexpectedParenthesis
            }
        }
    }

    /// Name of the stage that failed
    pub fn phase(&self) -> &'static str {
        match self {
            CalcError::Scan(_) => "scanner",
            CalcError::Parse(_) => "parser",
            CalcError::Eval(_) => "eval",
        }
    }

    /// Error line (scanner errors only)
    pub fn line(&self) -> Option<usize> {
        match self {
            CalcError::Scan(e) => Some(e.position().line),
            _ => None,
        }
    }

    /// Error column (scanner errors only)
    pub fn column(&self) -> Option<usize> {
        match self {
            CalcError::Scan(e) => Some(e.position().column),
            _ => None,
        }
    }

    /// Structured report, suitable for JSON output
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            kind: self.kind(),
            message: self.to_string(),
            line: self.line(),
            column: self.column(),
        }
    }
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub phase: &'static str,
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "[{}] {}:{}: {}", self.phase, line, column, self.message)
            }
            _ => write!(f, "[{}] {}", self.phase, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kit::lexer::SourcePosition;

    #[test]
    fn test_error_message_is_stage_message() {
        let err = CalcError::from(EvalError::DivisionByZero);
        assert_eq!(err.to_string(), "division by 0");
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(err.phase(), "eval");
    }

    #[test]
    fn test_scan_error_location() {
        let err = CalcError::from(ScanError::UnknownCharacter {
            ch: '$',
            position: SourcePosition::new(1, 3, 2),
        });
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.column(), Some(3));
        assert_eq!(err.kind(), ErrorKind::UnknownCharacter);
    }

    #[test]
    fn test_parse_error_has_no_location() {
        let err = CalcError::from(ParseError::MismatchedParenthesis);
        assert_eq!(err.line(), None);
        assert_eq!(err.column(), None);
        assert_eq!(err.phase(), "parser");
    }

    #[test]
    fn test_report_json() {
        let report = CalcError::from(ParseError::MismatchedParenthesis).to_report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["phase"], "parser");
        assert_eq!(json["kind"], "MismatchedParenthesis");
        assert_eq!(json["message"], "mis-matched parenthesis");
        assert!(json.get("line").is_none());
    }

    #[test]
    fn test_report_display() {
        let err = CalcError::from(ScanError::UnknownCharacter {
            ch: '#',
            position: SourcePosition::start(),
        });
        assert_eq!(
            err.to_report().to_string(),
            "[scanner] 1:1: scanner encountered unknown character '#'"
        );
    }
}
