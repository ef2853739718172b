use std::fmt;

use super::Operator;

/// Compute the correct result for `operands` combined with `operator`.
///
/// Addition folds from 0 and multiplication from 1. Subtraction starts from the
/// first operand and subtracts the rest in order; an empty sequence yields 0.
pub fn evaluate(operator: Operator, operands: &[i64]) -> i64 {
    match operator {
        Operator::Addition => operands.iter().fold(0, |acc, &value| acc + value),
        Operator::Subtraction => match operands.split_first() {
            Some((&first, rest)) => rest.iter().fold(first, |acc, &value| acc - value),
            None => 0,
        },
        Operator::Multiplication => operands.iter().fold(1, |acc, &value| acc * value),
    }
}

/// An ordered operand sequence paired with the operator joining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operator: Operator,
    operands: Vec<i64>,
}

impl Problem {
    pub fn new(operator: Operator, operands: Vec<i64>) -> Self {
        Problem { operator, operands }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[i64] {
        &self.operands
    }

    /// The correct answer
    pub fn solution(&self) -> i64 {
        evaluate(self.operator, &self.operands)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!(" {} ", self.operator.symbol());
        let joined = self
            .operands
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(&separator);
        f.write_str(&joined)
    }
}
