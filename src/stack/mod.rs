//! Generic last-in-first-out container shared by the converter and the evaluator

mod core;
mod errors;

pub use core::Stack;
pub use errors::StackError;
