use crate::domain::payment::{PaymentId, PaymentRecord};
use crate::domain::ports::PaymentStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment records.
///
/// Uses `Arc<RwLock<HashMap<PaymentId, PaymentRecord>>>`; clones share the same map.
/// Nothing survives a process restart.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<PaymentId, PaymentRecord>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.payments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payments.read().await.is_empty()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, record: PaymentRecord) {
        let mut payments = self.payments.write().await;
        payments.entry(record.id()).or_insert(record);
    }

    async fn get(&self, id: PaymentId) -> Option<PaymentRecord> {
        let payments = self.payments.read().await;
        payments.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;
    use crate::domain::payment::{PaymentRequest, PaymentStatus};

    fn record(id: PaymentId, status: PaymentStatus) -> PaymentRecord {
        let request = PaymentRequest {
            card: Card::new("2222405343248877", "123"),
            expiry_month: 12,
            expiry_year: 2030,
            currency: "EUR".to_string(),
            amount: 250,
        };
        PaymentRecord::from_request(id, status, &request)
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryPaymentStore::new();
        let id = PaymentId::new();
        let payment = record(id, PaymentStatus::Authorized);

        store.insert(payment.clone()).await;
        assert_eq!(store.get(id).await, Some(payment));
        assert!(store.get(PaymentId::new()).await.is_none());
    }

    #[tokio::test]
    async fn test_insert_never_overwrites() {
        let store = InMemoryPaymentStore::new();
        let id = PaymentId::new();

        store.insert(record(id, PaymentStatus::Authorized)).await;
        store.insert(record(id, PaymentStatus::Declined)).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get(id).await.map(|p| p.status()),
            Some(PaymentStatus::Authorized)
        );
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = InMemoryPaymentStore::new();
        let view = store.clone();
        assert!(view.is_empty().await);

        let id = PaymentId::new();
        store.insert(record(id, PaymentStatus::Declined)).await;
        assert!(view.get(id).await.is_some());
    }
}
