use crate::domain::payment::{AuthorizationOutcome, PaymentRequest};
use crate::domain::ports::AcquiringBank;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the acquiring bank.
#[derive(Debug, Clone)]
pub struct BankConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl BankConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct BankAuthorizationRequest<'a> {
    card_number: &'a str,
    expiry_date: String,
    currency: &'a str,
    amount: i64,
    cvv: &'a str,
}

impl<'a> From<&'a PaymentRequest> for BankAuthorizationRequest<'a> {
    fn from(request: &'a PaymentRequest) -> Self {
        Self {
            card_number: request.card.number(),
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: &request.currency,
            amount: request.amount,
            cvv: request.card.cvv(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BankAuthorizationResponse {
    #[serde(default)]
    authorized: bool,
    #[serde(default)]
    authorization_code: Option<String>,
}

#[derive(Error, Debug)]
enum BankError {
    #[error("acquiring bank request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("acquiring bank responded with status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("acquiring bank response could not be decoded: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

/// Authorizes payments against the acquiring bank's HTTP API.
///
/// One attempt per payment, bounded by the configured timeouts. Any failure on the
/// way (connection, timeout, non-2xx status, undecodable body) yields `Declined`.
#[derive(Clone)]
pub struct HttpAcquiringBank {
    client: Client,
    payments_url: String,
}

impl HttpAcquiringBank {
    pub fn new(config: BankConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(&config.base_url, client))
    }

    /// Builds an adapter from an existing client.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            payments_url: format!("{}/payments", base_url.trim_end_matches('/')),
        }
    }

    async fn try_authorize(
        &self,
        request: &PaymentRequest,
    ) -> Result<AuthorizationOutcome, BankError> {
        let response = self
            .client
            .post(&self.payments_url)
            .json(&BankAuthorizationRequest::from(request))
            .send()
            .await
            .map_err(BankError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BankError::UnexpectedStatus(status));
        }

        let body: BankAuthorizationResponse = response
            .json()
            .await
            .map_err(BankError::MalformedResponse)?;

        debug!(
            authorized = body.authorized,
            authorization_code = body.authorization_code.as_deref().unwrap_or_default(),
            "acquiring bank answered"
        );

        Ok(if body.authorized {
            AuthorizationOutcome::Authorized
        } else {
            AuthorizationOutcome::Declined
        })
    }
}

#[async_trait]
impl AcquiringBank for HttpAcquiringBank {
    async fn authorize(&self, request: &PaymentRequest) -> AuthorizationOutcome {
        match self.try_authorize(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "acquiring bank call failed, declining payment");
                AuthorizationOutcome::Declined
            }
        }
    }
}
