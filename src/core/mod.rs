//! Core - pure calculator logic, no IO
//!
//! Scanner, minus resolver, shunting-yard transformer and postfix
//! evaluator, plus configuration and logger setup. Only operates on
//! in-memory data; terminal output lives in `platform`.

pub mod compiler;
pub mod config;
pub mod kit;
pub mod logger;
pub mod runtime;

pub use config::{Config, EvalConfig, LogConfig, OverflowPolicy, Phase, StackPolicy};
