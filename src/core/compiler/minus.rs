//! Unary/binary minus resolution
//!
//! A `-` is unary when it opens the expression or follows `(` or another
//! operator; every other `-` stays binary:
//!
//! ```text
//! -5        1 + -3      (-2 * 6)
//! -(1 + 2)  3 - -2      -1--2
//! ```

use tracing::trace;

use super::token::Token;

/// Rewrite `BinaryMinus` tokens in place
///
/// One forward pass with one token of lookback. An empty slice is left
/// untouched, and an already resolved slice does not change.
pub fn resolve_minus(tokens: &mut [Token]) {
    let mut prev: Option<Token> = None;
    for (index, token) in tokens.iter_mut().enumerate() {
        if *token == Token::BinaryMinus && opens_operand(prev) {
            trace!(target: "calc::resolver", index, "Minus is unary");
            *token = Token::UnaryMinus;
        }
        prev = Some(*token);
    }
}

/// By-value variant of [`resolve_minus`]
pub fn resolved(mut tokens: Vec<Token>) -> Vec<Token> {
    resolve_minus(&mut tokens);
    tokens
}

/// Whether the token after `prev` starts a new operand
fn opens_operand(prev: Option<Token>) -> bool {
    match prev {
        None => true,
        Some(Token::LeftParen) => true,
        Some(t) => t.is_operator(),
    }
}
