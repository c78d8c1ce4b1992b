//! Text-in, text-out boundary used by front ends

pub mod constants;
mod core;
mod errors;
mod format;

pub use core::{Calculator, calculate};
pub use errors::CalculatorError;
pub use format::format_result;
