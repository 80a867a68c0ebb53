use crate::domain::payment::{PaymentId, PaymentStatus};
use crate::domain::validation::Violation;
use thiserror::Error;

/// The ordered set of rule violations that caused a request to be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable messages in the order the checks ran.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// A rejected request never becomes a stored payment; this is its only status.
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus::Rejected
    }
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment request rejected: {}", .0.messages().join("; "))]
    Validation(ValidationFailure),
    #[error("Payment not found")]
    NotFound(PaymentId),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
