use thiserror::Error;

use crate::evaluator::EvaluatorError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Evaluation error: {0}")]
    EvaluatorError(#[from] EvaluatorError),
}
