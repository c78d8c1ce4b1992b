//! Splits a raw expression string into number and symbol tokens

mod core;
mod token;

pub use core::{is_numeral_char, tokenize};
pub use token::Token;

#[cfg(test)]
mod tests;
