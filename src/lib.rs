//! Infix Calc - A small evaluator for flat calculator expressions
//!
//! Expressions are tokenized, reordered into postfix order with the shunting-yard
//! algorithm and evaluated with a value stack. Operators of equal precedence apply
//! left to right; there are no parentheses, unary minus or exponentiation.

pub mod calculator;
pub mod converter;
pub mod evaluator;
pub mod stack;
pub mod tokenizer;

// Re-export the main public API
pub use calculator::constants::DEFAULT_OPERATORS;
pub use calculator::{Calculator, CalculatorError, format_result};
pub use converter::{DEFAULT_PRECEDENCE, PrecedenceTable};
pub use evaluator::{BinaryOperator, EvaluatorError};
pub use stack::{Stack, StackError};
pub use tokenizer::Token;

/// Evaluate an infix expression and format the result
///
/// `operators` is the alphabet of single-character operator symbols the caller
/// accepts, usually [`DEFAULT_OPERATORS`].
///
/// # Arguments
///
/// * `expression` - Digits, decimal points and operator characters, e.g. `"2+3×4"`
/// * `operators` - The operator alphabet
///
/// # Returns
///
/// * `Ok(String)` - The formatted result, or an empty string for empty input
/// * `Err(CalculatorError)` - If the expression is malformed
///
/// # Errors
///
/// This function will return an error if:
/// * An operator is missing an operand (e.g. `"+"` or `"2++3"`)
/// * A numeral cannot be parsed (e.g. `"1.2.3"`)
///
/// Division by zero is not an error and yields `Infinity` or `NaN`.
///
/// # Examples
///
/// ```
/// use infix_calc::{DEFAULT_OPERATORS, calculate};
///
/// assert_eq!(calculate("2+3×4", DEFAULT_OPERATORS).ok(), Some("14.0".to_string()));
/// assert_eq!(calculate("6-2-1", DEFAULT_OPERATORS).ok(), Some("3.0".to_string()));
/// assert_eq!(calculate("", DEFAULT_OPERATORS).ok(), Some(String::new()));
/// assert!(calculate("+", DEFAULT_OPERATORS).is_err());
/// ```
pub fn calculate(expression: &str, operators: &str) -> Result<String, CalculatorError> {
    calculator::calculate(expression, operators)
}
