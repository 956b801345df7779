//! Calculator scanner
//!
//! Turns source text into a flat token sequence in a single left-to-right
//! pass. Every `-` comes out as `BinaryMinus`; the minus resolver decides
//! later which ones are unary.

use tracing::{debug, trace};

use super::error::ScanError;
use super::token::Token;
use crate::core::config::OverflowPolicy;
use crate::core::kit::lexer::CharStream;

/// Scanner over one source string
pub struct Scanner<'a> {
    stream: CharStream<'a>,
    overflow: OverflowPolicy,
}

/// Space, tab, carriage return and newline
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_policy(source, OverflowPolicy::default())
    }

    pub fn with_policy(source: &'a str, overflow: OverflowPolicy) -> Self {
        Self {
            stream: CharStream::new(source),
            overflow,
        }
    }

    /// Scan the whole input
    ///
    /// The first unknown character aborts the scan; no partial sequence is
    /// returned.
    pub fn scan_all(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.stream.skip_while(is_whitespace);

        let start = self.stream.position();
        let c = match self.stream.peek() {
            Some(c) => c,
            None => {
                trace!(target: "calc::scanner", "Reached EOF");
                return Ok(None);
            }
        };

        let token = match c {
            '(' => self.single(Token::LeftParen),
            ')' => self.single(Token::RightParen),
            '+' => self.single(Token::Plus),
            '-' => self.single(Token::BinaryMinus),
            '*' => self.single(Token::Times),
            '/' => self.single(Token::Divide),
            '0'..='9' => self.scan_number()?,
            _ => {
                debug!(target: "calc::scanner", ch = ?c, %start, "Unknown character");
                return Err(ScanError::UnknownCharacter {
                    ch: c,
                    position: start,
                });
            }
        };

        trace!(target: "calc::scanner", %token, %start, "Produced token");
        Ok(Some(token))
    }

    fn single(&mut self, token: Token) -> Token {
        self.stream.advance();
        token
    }

    /// Maximal run of decimal digits
    fn scan_number(&mut self) -> Result<Token, ScanError> {
        let start = self.stream.position();
        let literal = self.stream.take_while(|c| c.is_ascii_digit());

        match literal.parse::<i64>() {
            Ok(value) => Ok(Token::Number(value)),
            // Only digits were collected, so the only failure is overflow
            Err(_) => match self.overflow {
                OverflowPolicy::Reject => Err(ScanError::LiteralOverflow {
                    literal,
                    position: start,
                }),
                OverflowPolicy::Saturate => {
                    debug!(target: "calc::scanner", %literal, "Saturating literal");
                    Ok(Token::Number(i64::MAX))
                }
            },
        }
    }
}

/// Scan `source` with the default overflow policy
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(source).scan_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compiler::token::render;
    use crate::core::kit::lexer::SourcePosition;

    #[test]
    fn test_basic_tokens() {
        let tokens = scan("(1 + 2)*3").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                Token::Number(1),
                Token::Plus,
                Token::Number(2),
                Token::RightParen,
                Token::Times,
                Token::Number(3),
            ]
        );
    }

    #[test]
    fn test_minus_always_binary() {
        let tokens = scan("-1 - -2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::BinaryMinus,
                Token::Number(1),
                Token::BinaryMinus,
                Token::BinaryMinus,
                Token::Number(2),
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(scan(" \t10\r\n/ 5 ").unwrap(), scan("10/5").unwrap());
        assert!(scan("").unwrap().is_empty());
        assert!(scan(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_digit_run_is_one_literal() {
        assert_eq!(scan("286").unwrap(), vec![Token::Number(286)]);
        assert_eq!(scan("007").unwrap(), vec![Token::Number(7)]);
        assert_eq!(scan("1 2").unwrap(), vec![Token::Number(1), Token::Number(2)]);
    }

    #[test]
    fn test_unknown_character() {
        let err = scan("#").unwrap_err();
        assert_eq!(
            err,
            ScanError::UnknownCharacter {
                ch: '#',
                position: SourcePosition::start(),
            }
        );
    }

    #[test]
    fn test_unknown_character_position() {
        let err = scan("1 +\n 2 % 3").unwrap_err();
        match err {
            ScanError::UnknownCharacter { ch, position } => {
                assert_eq!(ch, '%');
                assert_eq!(position.line, 2);
                assert_eq!(position.column, 4);
                assert_eq!(position.byte_offset, 7);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_no_identifiers_or_floats() {
        assert!(matches!(
            scan("x + 1"),
            Err(ScanError::UnknownCharacter { ch: 'x', .. })
        ));
        assert!(matches!(
            scan("1.5"),
            Err(ScanError::UnknownCharacter { ch: '.', .. })
        ));
    }

    #[test]
    fn test_literal_overflow_rejected() {
        let err = scan("1 + 9223372036854775808").unwrap_err();
        match err {
            ScanError::LiteralOverflow { literal, position } => {
                assert_eq!(literal, "9223372036854775808");
                assert_eq!(position.column, 5);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            scan("9223372036854775807").unwrap(),
            vec![Token::Number(i64::MAX)]
        );
    }

    #[test]
    fn test_literal_overflow_saturated() {
        let tokens = Scanner::with_policy("99999999999999999999999", OverflowPolicy::Saturate)
            .scan_all()
            .unwrap();
        assert_eq!(tokens, vec![Token::Number(i64::MAX)]);
    }

    #[test]
    fn test_render_round_trip() {
        for source in ["6 * 5 - (1 * 2 + 3 * 4)", "-(-2*-6)", "  1    +2", "((286))"] {
            let tokens = scan(source).unwrap();
            assert_eq!(scan(&render(&tokens)).unwrap(), tokens, "source: {source}");
        }
    }

    #[test]
    fn test_next_token_incremental() {
        let mut scanner = Scanner::new("4*2");
        assert_eq!(scanner.next_token().unwrap(), Some(Token::Number(4)));
        assert_eq!(scanner.next_token().unwrap(), Some(Token::Times));
        assert_eq!(scanner.next_token().unwrap(), Some(Token::Number(2)));
        assert_eq!(scanner.next_token().unwrap(), None);
    }
}
