//! # ActorEntity Trait
//!
//! The contract every resource (orders, catalog parts) implements to be owned by a
//! generic [`ResourceActor`](crate::framework::ResourceActor).
//!
//! The actor never builds entities itself: callers hand over a fully constructed
//! value and the actor files it under [`ActorEntity::id`]. Identifiers are
//! therefore chosen by the caller (a UUID generator for orders, the fixture for
//! parts) and the actor only enforces "one entity per key".

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Associated Types
/// `Id` is the map key. It must be printable because the actor logs it and
/// embeds it in [`FrameworkError::NotFound`](crate::framework::FrameworkError::NotFound).
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. `OrderId`, `PartId`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;
}
