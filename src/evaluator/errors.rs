use thiserror::Error;

use crate::stack::StackError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("Malformed expression: {0}")]
    StackUnderflow(#[from] StackError),
    #[error("Cannot parse '{0}' as a number")]
    InvalidNumber(String),
}
