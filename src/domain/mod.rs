//! Domain layer: payment value types, validation rules and the ports the
//! application layer depends on.

pub mod card;
pub mod payment;
pub mod ports;
pub mod validation;
