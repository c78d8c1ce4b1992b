use log::debug;

use crate::converter::precedence::PrecedenceTable;
use crate::stack::Stack;
use crate::tokenizer::Token;

/// Reorder infix `tokens` into postfix order.
///
/// An incoming operator pops every stacked operator of greater *or equal*
/// rank first, so operators of the same rank apply left to right.
pub fn to_postfix(tokens: Vec<Token>, precedence: &PrecedenceTable) -> Vec<Token> {
    let mut postfix = Vec::with_capacity(tokens.len());
    let mut operators: Stack<Token> = Stack::new();

    for token in tokens {
        if token.is_number() {
            postfix.push(token);
            continue;
        }

        let rank = precedence.rank_of(&token);
        while let Some(popped) = operators.pop_if(|top| rank <= precedence.rank_of(top)) {
            postfix.push(popped);
        }
        operators.push(token);
    }

    while let Ok(remaining) = operators.pop() {
        postfix.push(remaining);
    }

    debug!("Postfix: {:?}", postfix_strings(&postfix));
    postfix
}

/// Textual form of a token sequence
pub fn postfix_strings(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}
