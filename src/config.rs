use crate::infrastructure::acquiring_bank::BankConfig;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

/// Card payment gateway: validates authorization requests, forwards them to the
/// acquiring bank and serves the recorded outcomes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address the HTTP API listens on.
    #[arg(long, default_value = "0.0.0.0:8090", env = "PAYMENT_GATEWAY_BIND")]
    pub bind: SocketAddr,

    /// Base URL of the acquiring bank.
    #[arg(long, default_value = "http://localhost:8080", env = "ACQUIRING_BANK_BASE_URL")]
    pub bank_url: String,

    /// Connect timeout for acquiring bank calls, in milliseconds.
    #[arg(long, default_value_t = 10_000, env = "ACQUIRING_BANK_CONNECT_TIMEOUT_MS")]
    pub bank_connect_timeout_ms: u64,

    /// Overall timeout for an acquiring bank call, in milliseconds.
    #[arg(long, default_value_t = 10_000, env = "ACQUIRING_BANK_REQUEST_TIMEOUT_MS")]
    pub bank_request_timeout_ms: u64,

    /// Log filter, used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    pub fn bank_config(&self) -> BankConfig {
        BankConfig {
            base_url: self.bank_url.clone(),
            connect_timeout: Duration::from_millis(self.bank_connect_timeout_ms),
            request_timeout: Duration::from_millis(self.bank_request_timeout_ms),
        }
    }
}
