use std::fmt;

use crate::stack::errors::StackError;

/// Pushdown stack with checked `pop` and `peek`
#[derive(Debug, Clone)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.elements
            .pop()
            .ok_or(StackError::Underflow { operation: "pop" })
    }

    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] when the stack is empty.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.elements
            .last()
            .ok_or(StackError::Underflow { operation: "peek" })
    }

    /// Pop the top element only when `predicate` holds for it
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if self.elements.last().is_some_and(predicate) {
            self.elements.pop()
        } else {
            None
        }
    }

    pub fn is_not_empty(&self) -> bool {
        !self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stack{:?}", self.elements)
    }
}
