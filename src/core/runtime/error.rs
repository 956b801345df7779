//! Evaluator errors

use thiserror::Error;

/// Postfix evaluation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator found fewer operands than its arity, or nothing was left
    #[error("not enough numbers to pop")]
    InsufficientOperands,

    #[error("division by 0")]
    DivisionByZero,

    /// Result does not fit in `i64`
    #[error("integer overflow")]
    ArithmeticOverflow,

    /// More than one operand remained (strict stack policy)
    #[error("{0} values left on the stack, expected 1")]
    LeftoverOperands(usize),

    /// `(` or `)` inside a postfix sequence
    #[error("parenthesis in postfix expression")]
    UnexpectedParenthesis,
}
