use crate::tokenizer::{Token, is_numeral_char, tokenize};

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn test_tokenize_empty() {
    assert_eq!(tokenize(""), Vec::<Token>::new());
}

#[test]
fn test_tokenize_single_number() {
    assert_eq!(tokenize("123.45"), vec![number("123.45")]);
}

#[test]
fn test_tokenize_binary_expression() {
    assert_eq!(
        tokenize("12+3×4"),
        vec![
            number("12"),
            Token::Symbol('+'),
            number("3"),
            Token::Symbol('×'),
            number("4"),
        ]
    );
}

#[test]
fn test_tokenize_keeps_multiple_decimal_points() {
    assert_eq!(
        tokenize("1.2.3-4"),
        vec![number("1.2.3"), Token::Symbol('-'), number("4")]
    );
}

#[test]
fn test_tokenize_unknown_characters_become_symbols() {
    assert_eq!(
        tokenize("7a b"),
        vec![
            number("7"),
            Token::Symbol('a'),
            Token::Symbol(' '),
            Token::Symbol('b'),
        ]
    );
}

#[test]
fn test_tokenize_consecutive_operators() {
    assert_eq!(
        tokenize("+-5"),
        vec![Token::Symbol('+'), Token::Symbol('-'), number("5")]
    );
}

#[test]
fn test_token_display() {
    assert_eq!(format!("{}", number("0.5")), "0.5");
    assert_eq!(format!("{}", Token::Symbol('÷')), "÷");
}

#[test]
fn test_token_accessors() {
    assert!(number("1").is_number());
    assert_eq!(number("1").as_symbol(), None);
    assert_eq!(Token::Symbol('%').as_symbol(), Some('%'));
}

#[test]
fn test_is_numeral_char() {
    assert!(is_numeral_char('0'));
    assert!(is_numeral_char('9'));
    assert!(is_numeral_char('.'));
    assert!(!is_numeral_char('+'));
    assert!(!is_numeral_char('×'));
    assert!(is_numeral_char('٣'));
}

#[test]
fn test_tokenize_non_ascii_digits_join_numbers() {
    assert_eq!(
        tokenize("1+٣4"),
        vec![number("1"), Token::Symbol('+'), number("٣4")]
    );
}
