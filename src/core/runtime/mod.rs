//! Runtime: postfix evaluation over an operand stack

pub mod error;
pub mod evaluator;
pub mod stack;

pub use error::EvalError;
pub use evaluator::eval_postfix;
pub use stack::OperandStack;
