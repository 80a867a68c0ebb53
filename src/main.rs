use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_gateway::application::gateway::PaymentGateway;
use payment_gateway::config::Cli;
use payment_gateway::domain::ports::{AcquiringBankBox, PaymentStoreBox};
use payment_gateway::infrastructure::acquiring_bank::HttpAcquiringBank;
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::interfaces::http;
use payment_gateway::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level, cli.log_format);

    // Wire the in-memory store and the HTTP acquiring bank into the gateway
    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let bank: AcquiringBankBox =
        Box::new(HttpAcquiringBank::new(cli.bank_config()).into_diagnostic()?);
    let gateway = Arc::new(PaymentGateway::new(store, bank));

    let listener = TcpListener::bind(cli.bind).await.into_diagnostic()?;
    info!(
        address = %cli.bind,
        acquiring_bank = %cli.bank_url,
        "payment gateway v{} listening",
        env!("CARGO_PKG_VERSION")
    );

    // Serve until Ctrl-C
    axum::serve(listener, http::router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("payment gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
