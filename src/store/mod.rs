//! # Order Store
//!
//! The [`OrderStore`] trait is the only way the orchestrator touches order state.
//! Two backends implement it:
//!
//! - [`InMemoryOrderStore`]: one `RwLock` over a map. Reads share the lock, every
//!   create/update takes it exclusively for the duration of a single map mutation.
//! - [`ActorOrderStore`]: orders live inside a [`ResourceActor`](crate::framework::ResourceActor);
//!   the actor loop serializes every request, so a mutator runs with exclusive access
//!   to the stored order.
//!
//! Mutators run inside that exclusive section. They must stay synchronous and must
//! not call back into the store.

pub mod actor;
pub mod error;
pub mod memory;

pub use actor::ActorOrderStore;
pub use error::StoreError;
pub use memory::InMemoryOrderStore;

use crate::framework::Mutator;
use crate::model::{Order, OrderId};
use async_trait::async_trait;

/// Concurrency-safe keyed storage of orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns a snapshot of the order.
    async fn get(&self, id: &OrderId) -> Result<Order, StoreError>;

    /// Inserts a new order. The caller guarantees the id is fresh; a collision
    /// overwrites the previous entry.
    async fn create(&self, order: Order) -> Result<(), StoreError>;

    /// Applies `mutator` atomically to the stored order and returns the result.
    async fn update(&self, id: &OrderId, mutator: Mutator<Order>) -> Result<Order, StoreError>;
}
