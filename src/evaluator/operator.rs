use log::warn;

/// Binary operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    /// In the operator alphabet but without arithmetic meaning
    Unknown(char),
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '+' => BinaryOperator::Add,
            '-' => BinaryOperator::Subtract,
            '×' => BinaryOperator::Multiply,
            '÷' => BinaryOperator::Divide,
            '%' => BinaryOperator::Remainder,
            other => BinaryOperator::Unknown(other),
        }
    }

    /// Apply `left op right` with IEEE semantics.
    ///
    /// Division by zero yields an infinity or NaN. `Unknown` yields `0.0`
    /// rather than an error; callers relying on a strict alphabet should
    /// keep it in sync with [`BinaryOperator::from_symbol`].
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Remainder => left % right,
            BinaryOperator::Unknown(symbol) => {
                warn!(
                    "Operator '{}' has no arithmetic meaning, substituting 0.0",
                    symbol
                );
                0.0
            }
        }
    }
}
