use crate::converter::{DEFAULT_PRECEDENCE, PrecedenceTable, postfix_strings, to_postfix};
use crate::tokenizer::tokenize;

fn postfix_of(expression: &str) -> Vec<String> {
    postfix_strings(&to_postfix(tokenize(expression), &DEFAULT_PRECEDENCE))
}

#[test]
fn test_empty_sequence() {
    assert_eq!(postfix_of(""), Vec::<String>::new());
}

#[test]
fn test_single_number_passes_through() {
    assert_eq!(postfix_of("42"), vec!["42"]);
}

#[test]
fn test_equal_precedence_is_left_to_right() {
    assert_eq!(postfix_of("6-2-1"), vec!["6", "2", "-", "1", "-"]);
    assert_eq!(postfix_of("8÷4×2"), vec!["8", "4", "÷", "2", "×"]);
}

#[test]
fn test_higher_precedence_binds_tighter() {
    assert_eq!(postfix_of("2+3×4"), vec!["2", "3", "4", "×", "+"]);
    assert_eq!(postfix_of("2×3+4"), vec!["2", "3", "×", "4", "+"]);
}

#[test]
fn test_mixed_chain() {
    assert_eq!(
        postfix_of("1+2×3-4%3"),
        vec!["1", "2", "3", "×", "+", "4", "3", "%", "-"]
    );
}

#[test]
fn test_unknown_symbol_has_rank_zero() {
    // '^' is absent from the table, so it never outranks what is stacked
    assert_eq!(postfix_of("2×3^4"), vec!["2", "3", "×", "4", "^"]);
    assert_eq!(postfix_of("2^3×4"), vec!["2", "3", "4", "×", "^"]);
}

#[test]
fn test_leading_operator_is_kept() {
    assert_eq!(postfix_of("+5"), vec!["5", "+"]);
}

#[test]
fn test_precedence_table_lookup() {
    assert_eq!(DEFAULT_PRECEDENCE.rank('+'), 1);
    assert_eq!(DEFAULT_PRECEDENCE.rank('-'), 1);
    assert_eq!(DEFAULT_PRECEDENCE.rank('×'), 2);
    assert_eq!(DEFAULT_PRECEDENCE.rank('÷'), 2);
    assert_eq!(DEFAULT_PRECEDENCE.rank('%'), 2);
    assert_eq!(DEFAULT_PRECEDENCE.rank('?'), 0);
    assert_eq!(PrecedenceTable::default(), *DEFAULT_PRECEDENCE);
}

#[test]
fn test_custom_table() {
    let table = PrecedenceTable::from_pairs(&[('+', 2), ('×', 1)]);
    let postfix = postfix_strings(&to_postfix(tokenize("2+3×4"), &table));
    assert_eq!(postfix, vec!["2", "3", "+", "4", "×"]);
}

#[test]
fn test_equal_rank_drains_whole_run() {
    assert_eq!(
        postfix_of("1×2÷3%4"),
        vec!["1", "2", "×", "3", "÷", "4", "%"]
    );
    assert_eq!(
        postfix_of("1+2×3÷4-5"),
        vec!["1", "2", "3", "×", "4", "÷", "+", "5", "-"]
    );
}
