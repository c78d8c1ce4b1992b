use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StackError {
    #[error("You cannot {operation} from an empty stack")]
    Underflow { operation: &'static str },
}
