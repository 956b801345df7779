//! Platform - IO adapters
//!
//! Everything with side effects lives here:
//! - CLI error formatting
//! - the interactive REPL

pub mod cli;
pub mod repl;

pub use cli::{print_error_with_source, raw, write_error_with_source};
pub use repl::{Mode, ReplOptions};
