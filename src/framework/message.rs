//! # Generic Messages
//!
//! This module defines the message types exchanged between a `ResourceClient`
//! and its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// In-place mutation applied to a stored entity.
///
/// The actor runs it inside its message loop, so it executes with exclusive
/// access to the entity and must not block or await anything.
pub type Mutator<T> = Box<dyn FnOnce(&mut T) + Send>;

/// Predicate used by [`ResourceRequest::Query`] to select entities.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Instead of ad-hoc messages per operation, every actor speaks the same small
/// vocabulary:
///
/// - **Create**: insert a fully built entity under its own id.
/// - **Get**: fetch a snapshot of one entity.
/// - **Update**: apply a [`Mutator`] atomically and return the new snapshot.
/// - **Query**: return snapshots of every entity matching a [`Filter`].
///
/// There is no delete: resources here live for the whole process.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        item: T,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        mutator: Mutator<T>,
        respond_to: Response<T>,
    },
    Query {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
}

impl<T: ActorEntity> fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRequest::Create { item, .. } => {
                f.debug_struct("Create").field("item", item).finish()
            }
            ResourceRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            ResourceRequest::Update { id, .. } => {
                f.debug_struct("Update").field("id", id).finish_non_exhaustive()
            }
            ResourceRequest::Query { .. } => f.debug_struct("Query").finish_non_exhaustive(),
        }
    }
}
