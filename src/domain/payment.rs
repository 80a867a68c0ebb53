use super::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Globally unique payment identifier, assigned when a payment is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Generates a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PaymentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

/// What the acquiring bank decided. Bank failures are folded into `Declined`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthorizationOutcome {
    Authorized,
    Declined,
}

impl From<AuthorizationOutcome> for PaymentStatus {
    fn from(outcome: AuthorizationOutcome) -> Self {
        match outcome {
            AuthorizationOutcome::Authorized => PaymentStatus::Authorized,
            AuthorizationOutcome::Declined => PaymentStatus::Declined,
        }
    }
}

/// An inbound, not yet validated, authorization request.
///
/// Integer fields are kept wide and signed so that out-of-range input reaches the
/// validator instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub card: Card,
    pub expiry_month: i64,
    pub expiry_year: i64,
    pub currency: String,
    pub amount: i64,
}

/// A completed payment as held by the store.
///
/// Built in one step with its final status; there is no setter, so a record
/// is never observed half-initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    id: PaymentId,
    status: PaymentStatus,
    card_number_last_four: u16,
    expiry_month: i64,
    expiry_year: i64,
    currency: String,
    amount: i64,
}

impl PaymentRecord {
    /// Records the outcome of a request. Only the last four digits of the card survive.
    pub fn from_request(id: PaymentId, status: PaymentStatus, request: &PaymentRequest) -> Self {
        Self {
            id,
            status,
            card_number_last_four: request.card.last_four(),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
        }
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn card_number_last_four(&self) -> u16 {
        self.card_number_last_four
    }

    pub fn expiry_month(&self) -> i64 {
        self.expiry_month
    }

    pub fn expiry_year(&self) -> i64 {
        self.expiry_year
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PaymentRequest {
        PaymentRequest {
            card: Card::new("2222405343248877", "123"),
            expiry_month: 4,
            expiry_year: 2031,
            currency: "GBP".to_string(),
            amount: 100,
        }
    }

    #[test]
    fn test_record_keeps_only_last_four() {
        let id = PaymentId::new();
        let record = PaymentRecord::from_request(id, PaymentStatus::Authorized, &request());

        assert_eq!(record.id(), id);
        assert_eq!(record.status(), PaymentStatus::Authorized);
        assert_eq!(record.card_number_last_four(), 8877);
        assert_eq!(record.expiry_month(), 4);
        assert_eq!(record.expiry_year(), 2031);
        assert_eq!(record.currency(), "GBP");
        assert_eq!(record.amount(), 100);
        assert!(!format!("{:?}", record).contains("2222405343248877"));
    }

    #[test]
    fn test_outcome_to_status() {
        assert_eq!(
            PaymentStatus::from(AuthorizationOutcome::Authorized),
            PaymentStatus::Authorized
        );
        assert_eq!(
            PaymentStatus::from(AuthorizationOutcome::Declined),
            PaymentStatus::Declined
        );
    }

    #[test]
    fn test_status_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Declined).unwrap(),
            "\"Declined\""
        );
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(PaymentId::new(), PaymentId::new());
    }
}
