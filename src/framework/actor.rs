//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities and processes requests for them one at a time.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially*, so every `Update` mutator
/// runs with exclusive access to the map and no reader can observe a half-applied
/// mutation. No `Mutex` or `RwLock` is needed for the `store`.
///
/// # Usage
///
/// ```rust
/// use checkout_orders::framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Counter { id: u32, hits: u32 }
///
/// impl ActorEntity for Counter {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(8);
///     tokio::spawn(actor.run());
///
///     let id = client.create(Counter { id: 7, hits: 0 }).await.unwrap();
///     let updated = client.update(id, Box::new(|c: &mut Counter| c.hits += 1)).await.unwrap();
///     assert_eq!(updated.hits, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new, empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_items(buffer_size, Vec::new())
    }

    /// Creates an actor whose store is pre-populated with `items`.
    pub fn with_items(buffer_size: usize, items: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = items
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "checkout_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { item, respond_to } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, "Create");
                    if self.store.insert(id.clone(), item).is_some() {
                        warn!(entity_type, %id, "Create replaced an existing entry");
                    }
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    mutator,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        mutator(item);
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Query { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = items.len(), "Query");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
