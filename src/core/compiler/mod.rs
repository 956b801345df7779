//! Front end: tokens, scanner, minus resolver and shunting-yard

pub mod error;
pub mod minus;
pub mod scanner;
pub mod shunting_yard;
pub mod token;

pub use error::{ParseError, ScanError};
pub use minus::{resolve_minus, resolved};
pub use scanner::{scan, Scanner};
pub use shunting_yard::to_postfix;
pub use token::{render, Sequence, Token};
