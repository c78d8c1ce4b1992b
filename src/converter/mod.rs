//! Shunting-yard conversion from infix tokens to postfix order

mod core;
mod precedence;

pub use core::{postfix_strings, to_postfix};
pub use precedence::{DEFAULT_PRECEDENCE, PrecedenceTable};

#[cfg(test)]
mod tests;
