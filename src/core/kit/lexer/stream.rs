//! Character stream
//!
//! Walks a borrowed `&str` one Unicode scalar at a time, keeping the
//! position of the next unread character. Lookahead is a single `peek`;
//! consumed characters are never revisited.

use std::iter::Peekable;
use std::str::Chars;

use super::position::SourcePosition;

/// Character stream over an in-memory source
pub struct CharStream<'a> {
    chars: Peekable<Chars<'a>>,
    position: SourcePosition,
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            position: SourcePosition::start(),
        }
    }

    /// Position of the next unread character
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Look at the next character without consuming it
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume the next character
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position.advance(c);
        Some(c)
    }

    /// Consume characters while `pred` holds, collecting them
    pub fn take_while<F>(&mut self, mut pred: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut taken = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            taken.push(c);
            self.advance();
        }
        taken
    }

    /// Skip characters while `pred` holds
    pub fn skip_while<F>(&mut self, mut pred: F)
    where
        F: FnMut(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_ascii() {
        let mut stream = CharStream::new("abc");

        assert_eq!(stream.peek(), Some('a'));
        assert_eq!(stream.advance(), Some('a'));
        assert_eq!(stream.advance(), Some('b'));
        assert_eq!(stream.advance(), Some('c'));
        assert_eq!(stream.advance(), None);
        assert_eq!(stream.peek(), None);
    }

    #[test]
    fn test_stream_peek_does_not_consume() {
        let mut stream = CharStream::new("7");

        assert_eq!(stream.peek(), Some('7'));
        assert_eq!(stream.peek(), Some('7'));
        assert_eq!(stream.position().column, 1);
        assert_eq!(stream.advance(), Some('7'));
        assert_eq!(stream.position().column, 2);
    }

    #[test]
    fn test_stream_position_tracking() {
        let mut stream = CharStream::new("1\n2");

        stream.advance(); // '1'
        assert_eq!(stream.position().line, 1);
        assert_eq!(stream.position().column, 2);

        stream.advance(); // '\n'
        assert_eq!(stream.position().line, 2);
        assert_eq!(stream.position().column, 1);
    }

    #[test]
    fn test_stream_take_while() {
        let mut stream = CharStream::new("123+4");

        let digits = stream.take_while(|c| c.is_ascii_digit());
        assert_eq!(digits, "123");
        assert_eq!(stream.peek(), Some('+'));
        assert_eq!(stream.position().byte_offset, 3);
    }

    #[test]
    fn test_stream_skip_while() {
        let mut stream = CharStream::new(" \t\r\n5");

        stream.skip_while(char::is_whitespace);
        assert_eq!(stream.peek(), Some('5'));
        assert_eq!(stream.position().line, 2);
    }

    #[test]
    fn test_stream_empty() {
        let mut stream = CharStream::new("");
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.advance(), None);
    }
}
