//! Front-end errors: scanner and shunting-yard

use thiserror::Error;

use crate::core::kit::lexer::SourcePosition;

/// Scanner error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Character outside `0-9 ( ) + - * /` and whitespace
    #[error("scanner encountered unknown character '{ch}'")]
    UnknownCharacter { ch: char, position: SourcePosition },

    /// Literal does not fit in `i64` (rejecting overflow policy)
    #[error("integer literal '{literal}' is out of range")]
    LiteralOverflow {
        literal: String,
        position: SourcePosition,
    },
}

impl ScanError {
    pub fn position(&self) -> SourcePosition {
        match self {
            ScanError::UnknownCharacter { position, .. }
            | ScanError::LiteralOverflow { position, .. } => *position,
        }
    }
}

/// Shunting-yard error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `)` without a matching `(`, or a `(` never closed
    #[error("mis-matched parenthesis")]
    MismatchedParenthesis,
}
