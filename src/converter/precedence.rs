use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::tokenizer::Token;

lazy_static! {
    /// Additive operators rank 1, multiplicative and modulo rank 2
    pub static ref DEFAULT_PRECEDENCE: PrecedenceTable = PrecedenceTable::from_pairs(&[
        ('+', 1),
        ('-', 1),
        ('×', 2),
        ('÷', 2),
        ('%', 2),
    ]);
}

/// Operator symbol to binding rank
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    ranks: HashMap<char, u8>,
}

impl PrecedenceTable {
    pub fn from_pairs(pairs: &[(char, u8)]) -> Self {
        Self {
            ranks: pairs.iter().copied().collect(),
        }
    }

    /// Rank of `symbol`, 0 when the table has no entry for it
    pub fn rank(&self, symbol: char) -> u8 {
        self.ranks.get(&symbol).copied().unwrap_or(0)
    }

    pub(crate) fn rank_of(&self, token: &Token) -> u8 {
        token.as_symbol().map_or(0, |c| self.rank(c))
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        DEFAULT_PRECEDENCE.clone()
    }
}
