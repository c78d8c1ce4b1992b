use std::fmt;

/// A single lexical unit of a flat calculator expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Contiguous run of digits and decimal points, kept verbatim
    Number(String),
    /// Any other single character, operator or not
    Symbol(char),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn as_symbol(&self) -> Option<char> {
        match self {
            Token::Symbol(c) => Some(*c),
            Token::Number(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Symbol(c) => write!(f, "{}", c),
        }
    }
}
