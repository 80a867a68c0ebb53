use super::dto::{ErrorResponse, PaymentResponse, PostPaymentRequest};
use crate::application::gateway::PaymentGateway;
use crate::error::PaymentError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const PAYMENTS_PATH: &str = "/api/v1/payments";

/// Builds the HTTP API around a shared gateway.
pub fn router(gateway: Arc<PaymentGateway>) -> Router {
    Router::new()
        .route(PAYMENTS_PATH, post(create_payment))
        .route(&format!("{PAYMENTS_PATH}/:id"), get(get_payment))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

async fn create_payment(
    State(gateway): State<Arc<PaymentGateway>>,
    body: Result<Json<PostPaymentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PaymentResponse>), Response> {
    let Json(body) = body.map_err(unreadable_body)?;
    let record = gateway
        .authorize(body.into())
        .await
        .map_err(IntoResponse::into_response)?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// A body that does not deserialize gets the same 400 shape as a rule violation.
fn unreadable_body(rejection: JsonRejection) -> Response {
    let body = ErrorResponse {
        status: status_name(StatusCode::BAD_REQUEST).to_string(),
        messages: vec![rejection.body_text()],
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

async fn get_payment(
    State(gateway): State<Arc<PaymentGateway>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentResponse>, PaymentError> {
    let record = gateway.retrieve(id.into()).await?;
    Ok(Json(record.into()))
}

async fn health_check() -> &'static str {
    "OK"
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, messages) = match &self {
            PaymentError::Validation(failure) => (StatusCode::BAD_REQUEST, failure.messages()),
            PaymentError::NotFound(_) => (StatusCode::NOT_FOUND, vec![self.to_string()]),
        };
        let body = ErrorResponse {
            status: status_name(status).to_string(),
            messages,
        };
        (status, Json(body)).into_response()
    }
}

fn status_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        _ => "INTERNAL_SERVER_ERROR",
    }
}
