#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use payment_gateway::application::gateway::PaymentGateway;
use payment_gateway::domain::card::Card;
use payment_gateway::domain::payment::{AuthorizationOutcome, PaymentRequest};
use payment_gateway::domain::ports::AcquiringBank;
use payment_gateway::infrastructure::acquiring_bank::{BankConfig, HttpAcquiringBank};
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::time::Duration;

pub const CARD_NUMBER: &str = "2222405343248877";

pub fn next_year() -> i64 {
    i64::from(Utc::now().year()) + 1
}

/// A request that passes every validation rule.
pub fn valid_request() -> PaymentRequest {
    PaymentRequest {
        card: Card::new(CARD_NUMBER, "123"),
        expiry_month: 12,
        expiry_year: next_year(),
        currency: "USD".to_string(),
        amount: 100,
    }
}

/// The JSON body of a valid `POST /api/v1/payments`.
pub fn valid_payload() -> Value {
    json!({
        "cardNumber": CARD_NUMBER,
        "cvv": "123",
        "expiryMonth": 12,
        "expiryYear": next_year(),
        "currency": "USD",
        "amount": 100
    })
}

/// An HTTP bank adapter with short timeouts, pointed at `base_url`.
pub fn http_bank(base_url: &str) -> HttpAcquiringBank {
    let config = BankConfig {
        base_url: base_url.to_string(),
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_millis(500),
    };
    HttpAcquiringBank::new(config).expect("failed to build bank client")
}

/// A base URL where nothing is listening.
pub fn unreachable_bank_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind probe socket");
    let addr = listener.local_addr().expect("probe socket has no address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn gateway_with_bank(bank: impl AcquiringBank + 'static) -> (PaymentGateway, InMemoryPaymentStore) {
    let store = InMemoryPaymentStore::new();
    let gateway = PaymentGateway::new(Box::new(store.clone()), Box::new(bank));
    (gateway, store)
}

/// Always answers with the same outcome.
pub struct FixedBank(pub AuthorizationOutcome);

#[async_trait]
impl AcquiringBank for FixedBank {
    async fn authorize(&self, _request: &PaymentRequest) -> AuthorizationOutcome {
        self.0
    }
}
