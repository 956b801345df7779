//! Lexer kit
//!
//! Language-independent building blocks for scanners: a character stream
//! with one-character lookahead and source position tracking.

pub mod position;
pub mod stream;

pub use position::SourcePosition;
pub use stream::CharStream;
