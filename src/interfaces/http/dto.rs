use crate::domain::card::Card;
use crate::domain::payment::{PaymentId, PaymentRecord, PaymentRequest, PaymentStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/payments`.
///
/// Every field is optional on the wire; absent values become empty strings or zero
/// and are reported by the validator instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPaymentRequest {
    pub card_number: Option<String>,
    pub cvv: Option<String>,
    pub expiry_month: Option<i64>,
    pub expiry_year: Option<i64>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
}

impl From<PostPaymentRequest> for PaymentRequest {
    fn from(body: PostPaymentRequest) -> Self {
        PaymentRequest {
            card: Card::new(
                body.card_number.unwrap_or_default(),
                body.cvv.unwrap_or_default(),
            ),
            expiry_month: body.expiry_month.unwrap_or_default(),
            expiry_year: body.expiry_year.unwrap_or_default(),
            currency: body.currency.unwrap_or_default(),
            amount: body.amount.unwrap_or_default(),
        }
    }
}

/// A stored payment as returned to API callers. Card data is limited to the last four digits.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: i64,
    pub expiry_year: i64,
    pub currency: String,
    pub amount: i64,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(record: PaymentRecord) -> Self {
        Self {
            id: record.id(),
            status: record.status(),
            card_number_last_four: record.card_number_last_four(),
            expiry_month: record.expiry_month(),
            expiry_year: record.expiry_year(),
            currency: record.currency().to_string(),
            amount: record.amount(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub status: String,
    pub messages: Vec<String>,
}
