//! Infix to postfix conversion (shunting-yard)
//!
//! Non-recursive precedence climbing over an explicit operator stack.
//! An incoming operator first pops every stacked operator whose precedence
//! is greater than *or equal to* its own, which makes `+ - * /` left
//! associative. Unary minus has the highest precedence and binds to the
//! primary right after it.
//!
//! Some malformed input (`(1 + 2`) is caught here; other input (`1 + + 2`,
//! `1 2`) passes through and is left for the evaluator.

use tracing::trace;

use super::error::ParseError;
use super::token::Token;

/// Convert a resolved infix sequence to postfix
pub fn to_postfix(input: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(input.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in input {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(op) => output.push(op),
                        None => {
                            trace!(target: "calc::parser", "')' without matching '('");
                            return Err(ParseError::MismatchedParenthesis);
                        }
                    }
                }
            }
            op => {
                pop_while_binds_tighter(&mut stack, &mut output, op);
                stack.push(op);
            }
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_paren() {
            trace!(target: "calc::parser", "Unclosed '(' at end of input");
            return Err(ParseError::MismatchedParenthesis);
        }
        output.push(top);
    }

    Ok(output)
}

/// Move stacked operators with `precedence >= incoming` to the output
fn pop_while_binds_tighter(stack: &mut Vec<Token>, output: &mut Vec<Token>, incoming: Token) {
    let Some(incoming_prec) = incoming.precedence() else {
        return;
    };
    while let Some(&top) = stack.last() {
        match top.precedence() {
            Some(top_prec) if top_prec >= incoming_prec => {
                trace!(target: "calc::parser", %top, %incoming, "Pop operator");
                output.push(top);
                stack.pop();
            }
            _ => break,
        }
    }
}
