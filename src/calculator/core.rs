use log::{debug, info, warn};

use crate::calculator::constants::DEFAULT_OPERATORS;
use crate::calculator::errors::CalculatorError;
use crate::calculator::format::format_result;
use crate::converter::{DEFAULT_PRECEDENCE, PrecedenceTable, postfix_strings, to_postfix};
use crate::evaluator::evaluate_postfix;
use crate::tokenizer::{Token, tokenize};

/// Short-lived evaluator bound to one operator alphabet and precedence table
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    operators: &'a str,
    precedence: &'a PrecedenceTable,
}

impl<'a> Calculator<'a> {
    pub fn new(operators: &'a str) -> Self {
        Self {
            operators,
            precedence: &*DEFAULT_PRECEDENCE,
        }
    }

    pub fn with_precedence(operators: &'a str, precedence: &'a PrecedenceTable) -> Self {
        Self {
            operators,
            precedence,
        }
    }

    pub fn operators(&self) -> &str {
        self.operators
    }

    pub fn precedence(&self) -> &PrecedenceTable {
        self.precedence
    }

    /// Infix `expression` reordered into postfix tokens
    pub fn postfix(&self, expression: &str) -> Vec<Token> {
        to_postfix(tokenize(expression), self.precedence)
    }

    /// Same as [`Calculator::postfix`], rendered as text
    pub fn postfix_strings(&self, expression: &str) -> Vec<String> {
        postfix_strings(&self.postfix(expression))
    }

    /// Numeric value of `expression`, `None` when it has no tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is malformed (an operator lacks
    /// operands) or a numeral cannot be parsed.
    pub fn evaluate(&self, expression: &str) -> Result<Option<f64>, CalculatorError> {
        let postfix = self.postfix(expression);
        if postfix.is_empty() {
            debug!("Empty expression, nothing to evaluate");
            return Ok(None);
        }

        match evaluate_postfix(&postfix, self.operators) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Failed to evaluate '{}': {}", expression, e);
                Err(e.into())
            }
        }
    }

    /// Formatted result of `expression`, or an empty string for empty input
    ///
    /// # Errors
    ///
    /// See [`Calculator::evaluate`].
    pub fn calculate(&self, expression: &str) -> Result<String, CalculatorError> {
        let result = self
            .evaluate(expression)?
            .map(format_result)
            .unwrap_or_default();
        info!("'{}' = '{}'", expression, result);
        Ok(result)
    }
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATORS)
    }
}

/// Evaluate `expression` against the `operators` alphabet in one call
///
/// # Errors
///
/// See [`Calculator::evaluate`].
pub fn calculate(expression: &str, operators: &str) -> Result<String, CalculatorError> {
    Calculator::new(operators).calculate(expression)
}
