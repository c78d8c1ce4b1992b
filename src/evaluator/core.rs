use log::{debug, warn};

use crate::evaluator::errors::EvaluatorError;
use crate::evaluator::operator::BinaryOperator;
use crate::stack::Stack;
use crate::tokenizer::Token;

/// The operator character of `token` when it is a single character from `operators`
fn operator_symbol(token: &Token, operators: &str) -> Option<char> {
    let symbol = match token {
        Token::Symbol(c) => *c,
        Token::Number(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return None,
            }
        }
    };
    operators.contains(symbol).then_some(symbol)
}

/// # Errors
///
/// Returns an error when:
/// - An operator finds fewer than two values on the stack, or the sequence is empty
/// - A non-operator token cannot be parsed as a floating-point number
pub fn evaluate_postfix(postfix: &[Token], operators: &str) -> Result<f64, EvaluatorError> {
    let mut values: Stack<f64> = Stack::new();

    for token in postfix {
        if let Some(symbol) = operator_symbol(token, operators) {
            let right = values.pop()?;
            let left = values.pop()?;
            let result = BinaryOperator::from_symbol(symbol).apply(left, right);
            debug!("{} {} {} = {}", left, symbol, right, result);
            values.push(result);
        } else {
            let text = token.to_string();
            let value = text
                .parse::<f64>()
                .map_err(|_| EvaluatorError::InvalidNumber(text.clone()))?;
            values.push(value);
        }
    }

    let result = values.pop()?;
    if values.is_not_empty() {
        warn!("{} values left unused on the stack", values.len());
    }
    debug!("Postfix evaluated to: {}", result);
    Ok(result)
}
