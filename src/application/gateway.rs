use crate::domain::payment::{PaymentId, PaymentRecord, PaymentRequest};
use crate::domain::ports::{AcquiringBankBox, PaymentStoreBox};
use crate::domain::validation::validate;
use crate::error::{PaymentError, Result, ValidationFailure};
use chrono::Utc;
use tracing::{debug, info, warn};

/// The entry point for authorizing and retrieving payments.
///
/// `PaymentGateway` validates each request, asks the acquiring bank exactly once,
/// and records the outcome under a freshly generated identifier. It holds no
/// per-request state, so a single instance can serve concurrent callers; the only
/// shared state is the store, touched once at the end of each authorization.
pub struct PaymentGateway {
    store: PaymentStoreBox,
    bank: AcquiringBankBox,
}

impl PaymentGateway {
    /// Creates a new `PaymentGateway` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - Where completed payments are recorded.
    /// * `bank` - The acquiring bank that decides each authorization.
    pub fn new(store: PaymentStoreBox, bank: AcquiringBankBox) -> Self {
        Self { store, bank }
    }

    /// Authorizes a payment request.
    ///
    /// Returns the stored record, whose status is `Authorized` or `Declined`, or
    /// `PaymentError::Validation` with every violated rule. A rejected request never
    /// reaches the bank and leaves nothing behind in the store.
    pub async fn authorize(&self, request: PaymentRequest) -> Result<PaymentRecord> {
        let violations = validate(&request, Utc::now().date_naive());
        if !violations.is_empty() {
            let failure = ValidationFailure::new(violations);
            warn!(violations = ?failure.messages(), "payment request rejected");
            return Err(PaymentError::Validation(failure));
        }

        let outcome = self.bank.authorize(&request).await;

        let record = PaymentRecord::from_request(PaymentId::new(), outcome.into(), &request);
        self.store.insert(record.clone()).await;

        info!(payment_id = %record.id(), status = ?record.status(), "payment processed");
        Ok(record)
    }

    /// Looks up a previously processed payment.
    pub async fn retrieve(&self, id: PaymentId) -> Result<PaymentRecord> {
        debug!(payment_id = %id, "retrieving payment");
        self.store.get(id).await.ok_or(PaymentError::NotFound(id))
    }
}
