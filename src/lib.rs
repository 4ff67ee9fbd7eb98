//! # Checkout Orders
//!
//! Order lifecycle orchestration for a small checkout flow. An order is created
//! against a parts catalog, paid through a payment executor, or cancelled; the
//! [`orchestrator`] enforces the state machine and the [`store`] keeps every
//! mutation atomic under concurrent requests.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic `ResourceActor<T>`: one Tokio task owns a map of entities and serves
//! requests from a bounded channel, one at a time. [`framework::mock`] scripts a
//! client for unit tests.
//!
//! ### 2. The Core ([`orchestrator`], [`store`])
//! - [`OrderOrchestrator`](orchestrator::OrderOrchestrator): create, get, pay, cancel.
//! - [`OrderStore`](store::OrderStore): `get` / `create` / `update` with a mutator,
//!   backed by either a lock-guarded map or a resource actor.
//!
//! ### 3. The Collaborators ([`clients`], [`inventory_actor`], [`payment_actor`])
//! The orchestrator only sees the [`CatalogGateway`](clients::CatalogGateway) and
//! [`PaymentGateway`](clients::PaymentGateway) traits. The in-process actors behind
//! them serve a static parts fixture and always-successful payments.
//!
//! ### 4. The Edges ([`http`], [`lifecycle`])
//! JSON routes under `/api/v1`, configuration from `CHECKOUT_*` variables,
//! tracing setup, and [`CheckoutSystem`](lifecycle::CheckoutSystem) wiring and shutdown.
//!
//! ## Running
//!
//! ```bash
//! CHECKOUT_STORE_BACKEND=actor RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod http;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod orchestrator;
pub mod payment_actor;
pub mod store;
