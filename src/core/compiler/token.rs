//! Calculator tokens

use std::fmt;

/// A calculator token
///
/// Only `Number` carries a value. A freshly scanned sequence holds
/// `BinaryMinus` for every `-`; `UnaryMinus` is introduced by the minus
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    LeftParen,
    RightParen,
    Plus,
    BinaryMinus,
    UnaryMinus,
    Times,
    Divide,
    Number(i64),
}

impl Token {
    /// `+ - * /` and unary minus
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::BinaryMinus | Token::UnaryMinus | Token::Times | Token::Divide
        )
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen)
    }

    /// Binding strength, higher binds tighter. `None` for non-operators.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::UnaryMinus => Some(4),
            Token::Times | Token::Divide => Some(3),
            Token::Plus | Token::BinaryMinus => Some(2),
            _ => None,
        }
    }

    /// Number of operands consumed. `None` for non-operators.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Token::UnaryMinus => Some(1),
            Token::Plus | Token::BinaryMinus | Token::Times | Token::Divide => Some(2),
            _ => None,
        }
    }

    /// One-character tag, `m`/`u` for the minus variants and `n` for numbers
    pub fn symbol(&self) -> char {
        match self {
            Token::LeftParen => '(',
            Token::RightParen => ')',
            Token::Plus => '+',
            Token::BinaryMinus => 'm',
            Token::UnaryMinus => 'u',
            Token::Times => '*',
            Token::Divide => '/',
            Token::Number(_) => 'n',
        }
    }

    /// Source text of the token
    pub fn source_text(&self) -> String {
        match self {
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::Plus => "+".to_string(),
            Token::BinaryMinus | Token::UnaryMinus => "-".to_string(),
            Token::Times => "*".to_string(),
            Token::Divide => "/".to_string(),
            Token::Number(n) => n.to_string(),
        }
    }
}

/// `<42>` for numbers, `<+>` (the tag character) for everything else
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "<{n}>"),
            other => write!(f, "<{}>", other.symbol()),
        }
    }
}

/// Display adapter for a token sequence: `{<1>, <+>, <2>}`
pub struct Sequence<'a>(pub &'a [Token]);

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}")?;
        }
        write!(f, "}}")
    }
}

/// Render tokens back to source text, space separated
///
/// Scanning the result of rendering a scanned sequence yields the same
/// sequence. Negative `Number` payloads never come out of the scanner and
/// would re-scan as a minus followed by a number.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::source_text)
        .collect::<Vec<_>>()
        .join(" ")
}
