use log::debug;

use crate::tokenizer::token::Token;

/// Any Unicode digit or the decimal point; non-ASCII digits are grouped
/// here and rejected later when the numeral is parsed
#[inline]
pub fn is_numeral_char(c: char) -> bool {
    c.is_numeric() || c == '.'
}

/// Scan `expression` left to right, grouping digit/decimal runs into numbers.
///
/// Every other character becomes its own [`Token::Symbol`], whether or not it
/// is a known operator. Decimal points are not validated here.
pub fn tokenize(expression: &str) -> Vec<Token> {
    debug!("Tokenizing expression: '{}'", expression);

    let mut tokens = Vec::new();
    let mut number = String::new();

    for c in expression.chars() {
        if is_numeral_char(c) {
            number.push(c);
        } else {
            if !number.is_empty() {
                tokens.push(Token::Number(std::mem::take(&mut number)));
            }
            tokens.push(Token::Symbol(c));
        }
    }
    if !number.is_empty() {
        tokens.push(Token::Number(number));
    }

    debug!("Produced {} tokens", tokens.len());
    tokens
}
