//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. Module
//! paths are hidden (`with_target(false)`); actor logs carry an `entity_type`
//! field instead, and orchestrator and gateway calls open spans through
//! `#[instrument]`, so a request shows up as a nested span path:
//!
//! ```text
//! INFO create_order{user_id=UserId("u-1") parts=2}: Order created order_id=… total_price=68000.0
//! INFO pay_order{order_id=… payment_method="CARD"}:pay_order{order_id=…}: Payment processed …
//! ```
//!
//! `RUST_LOG` takes precedence over the configured default filter:
//!
//! ```bash
//! RUST_LOG=debug cargo run                           # payloads at function entry
//! RUST_LOG=checkout_orders::store=debug cargo run    # store traffic only
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
