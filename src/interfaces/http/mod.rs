//! HTTP boundary: JSON request/response shapes and the axum router.

pub mod dto;
pub mod routes;

pub use routes::router;
