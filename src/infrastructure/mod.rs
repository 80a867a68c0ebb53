//! Adapters implementing the domain ports: the in-memory payment store and the
//! HTTP client for the acquiring bank.

pub mod acquiring_bank;
pub mod in_memory;
