use super::payment::{AuthorizationOutcome, PaymentId, PaymentRecord, PaymentRequest};
use async_trait::async_trait;

/// Append-only storage for completed payments.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert(&self, record: PaymentRecord);
    async fn get(&self, id: PaymentId) -> Option<PaymentRecord>;
}

/// The acquiring bank as seen by the gateway.
///
/// Implementations always return a definite outcome. Any failure to get an answer
/// from the bank must be reported as `Declined`.
#[async_trait]
pub trait AcquiringBank: Send + Sync {
    async fn authorize(&self, request: &PaymentRequest) -> AuthorizationOutcome;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type AcquiringBankBox = Box<dyn AcquiringBank>;
