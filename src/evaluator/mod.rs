//! Postfix evaluation over a value stack

mod core;
mod errors;
mod operator;

pub use core::evaluate_postfix;
pub use errors::EvaluatorError;
pub use operator::BinaryOperator;
