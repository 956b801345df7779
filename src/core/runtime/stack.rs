//! Operand stack

use super::error::EvalError;

/// Integer operand stack owned by one evaluation
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<i64>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pop the top value
    #[inline]
    pub fn pop(&mut self) -> Result<i64, EvalError> {
        self.values.pop().ok_or(EvalError::InsufficientOperands)
    }

    /// Pop two values (the first popped is the right operand)
    ///
    /// Checks the depth before popping so a failure leaves the stack intact.
    #[inline]
    pub fn pop_two(&mut self) -> Result<(i64, i64), EvalError> {
        if self.values.len() < 2 {
            return Err(EvalError::InsufficientOperands);
        }
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }

    /// Bottom value, the first one pushed among those remaining
    pub fn bottom(&self) -> Result<i64, EvalError> {
        if self.is_empty() {
            return Err(EvalError::InsufficientOperands);
        }
        Ok(self.values[0])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
