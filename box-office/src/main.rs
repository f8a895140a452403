//! Box office CLI.
//!
//! Runs ticket purchases through a [`TicketService`] wired to the console
//! collaborators and prints the outcome of each.
//!
//! # Usage
//!
//! ```bash
//! # Built-in sample purchases
//! cargo run --bin box-office
//!
//! # Purchases given as JSON, one per argument
//! cargo run --bin box-office -- \
//!     '{"account_id": 1, "line_items": [{"category": "ADULT", "quantity": 2}]}'
//! ```

use anyhow::Context;
use box_office::metrics::register_business_metrics;
use box_office::{Config, ConsolePaymentService, ConsoleSeatReservationService, TicketService};
use box_office_core::{LineItem, PurchaseRequest};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(config.logging.ansi))
        .init();

    info!(metrics_enabled = config.metrics.enabled, "Starting box office");

    let metrics_handle = if config.metrics.enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("failed to install Prometheus recorder")?;
        register_business_metrics();
        Some(handle)
    } else {
        None
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let requests: Vec<Result<PurchaseRequest, String>> = if args.is_empty() {
        sample_requests().into_iter().map(Ok).collect()
    } else {
        args.iter().map(|arg| parse_request(arg)).collect()
    };

    let service = TicketService::new(
        ConsolePaymentService::shared(),
        ConsoleSeatReservationService::shared(),
    );

    for request in &requests {
        match request {
            Ok(request) => match service.purchase(request) {
                Ok(receipt) => println!("✓ {}", serde_json::to_string(&receipt)?),
                Err(err) => println!("✗ {err}"),
            },
            Err(message) => println!("✗ {message}"),
        }
    }

    if let Some(handle) = metrics_handle {
        println!("\n{}", handle.render());
    }

    Ok(())
}

/// Parses one command-line purchase; a bad argument is reported, not fatal
fn parse_request(arg: &str) -> Result<PurchaseRequest, String> {
    serde_json::from_str(arg).map_err(|err| {
        warn!(error = %err, "Skipping unparseable purchase request");
        format!("invalid purchase request: {err}")
    })
}

/// Purchases run when no request is given on the command line
fn sample_requests() -> Vec<PurchaseRequest> {
    vec![
        PurchaseRequest::new(
            1,
            [LineItem::adults(2), LineItem::children(3), LineItem::infants(1)],
        ),
        PurchaseRequest::new(1, [LineItem::children(3)]),
        PurchaseRequest::new(
            1,
            [LineItem::infants(3), LineItem::adults(20), LineItem::children(3)],
        ),
        PurchaseRequest::new(-1, [LineItem::adults(1)]),
        PurchaseRequest::new(1, []),
        PurchaseRequest::default(),
    ]
}
