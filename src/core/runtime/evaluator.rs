//! Postfix evaluator
//!
//! Numbers are pushed; an operator pops its operands and pushes the result.
//! For binary operators the first value popped is the right operand, so
//! `b op a` keeps the operands in the order they were pushed.

use tracing::{debug, trace};

use super::error::EvalError;
use super::stack::OperandStack;
use crate::core::compiler::Token;
use crate::core::config::{EvalConfig, StackPolicy};

/// Evaluate a postfix sequence
///
/// Stops at the first error; the partial stack is discarded. When no error
/// occurs the answer is the bottom stack slot. With [`StackPolicy::Lenient`]
/// extra operands are ignored, with [`StackPolicy::Strict`] they are an error.
pub fn eval_postfix(tokens: &[Token], config: &EvalConfig) -> Result<i64, EvalError> {
    let mut stack = OperandStack::new();

    for &token in tokens {
        match token {
            Token::Number(value) => stack.push(value),
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::UnexpectedParenthesis);
            }
            op => {
                let value = if op.arity() == Some(1) {
                    let a = stack.pop()?;
                    a.checked_neg().ok_or(EvalError::ArithmeticOverflow)?
                } else {
                    let (b, a) = stack.pop_two()?;
                    apply_binary(op, b, a)?
                };
                trace!(target: "calc::eval", %op, value, "Applied operator");
                stack.push(value);
            }
        }
    }

    let result = stack.bottom()?;

    if stack.len() > 1 {
        match config.stack {
            StackPolicy::Lenient => {
                debug!(
                    target: "calc::eval",
                    leftover = stack.len() - 1,
                    "Ignoring extra operands"
                );
            }
            StackPolicy::Strict => return Err(EvalError::LeftoverOperands(stack.len())),
        }
    }

    Ok(result)
}

/// `b op a`, with checked arithmetic and truncating division
fn apply_binary(op: Token, b: i64, a: i64) -> Result<i64, EvalError> {
    let value = match op {
        Token::Plus => b.checked_add(a),
        Token::BinaryMinus => b.checked_sub(a),
        Token::Times => b.checked_mul(a),
        Token::Divide => {
            if a == 0 {
                return Err(EvalError::DivisionByZero);
            }
            b.checked_div(a)
        }
        _ => unreachable!("{op} is not a binary operator"),
    };
    value.ok_or(EvalError::ArithmeticOverflow)
}
