//! Application layer containing the payment authorization orchestration.
//!
//! This module defines the `PaymentGateway`, which runs validation, the acquiring
//! bank call and the store insertion for each request, and serves lookups.

pub mod gateway;
