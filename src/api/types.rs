//! API output types

use serde::Serialize;

use crate::core::compiler::{Sequence, Token};

/// Every intermediate sequence of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Scanner output
    pub tokens: Vec<Token>,
    /// After minus resolution
    pub resolved: Vec<Token>,
    /// Shunting-yard output
    pub postfix: Vec<Token>,
    /// Evaluation result
    pub value: i64,
}

impl Trace {
    /// Rendered sequences, `{<1>, <+>}` style
    pub fn to_summary(&self) -> TraceSummary {
        TraceSummary {
            tokens: Sequence(&self.tokens).to_string(),
            resolved: Sequence(&self.resolved).to_string(),
            postfix: Sequence(&self.postfix).to_string(),
            value: self.value,
        }
    }
}

/// Serialisable form of [`Trace`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub tokens: String,
    pub resolved: String,
    pub postfix: String,
    pub value: i64,
}
