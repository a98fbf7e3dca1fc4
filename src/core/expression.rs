use crate::domain::model::{Evaluation, Operator};

/// Two operand slots and the operator between them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Expression {
    pub first: Option<f64>,
    pub second: Option<f64>,
    pub operator: Option<Operator>,
}

impl Expression {
    pub fn calculate(&self) -> Evaluation {
        match (self.first, self.operator, self.second) {
            (Some(first), Some(operator), Some(second)) => operator.apply(first, second),
            _ => Evaluation::Invalid,
        }
    }

    /// Product-based percentage: `first * second / 100`.
    pub fn calculate_percentage(&self) -> f64 {
        (self.first.unwrap_or(0.0) * self.second.unwrap_or(0.0)) / 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some() && self.operator.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
