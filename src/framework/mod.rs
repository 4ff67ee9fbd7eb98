//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for owning a collection of entities
//! inside a single Tokio task and talking to it through a cloneable client.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities
//! - [`ResourceClient`] - Type-safe handle for sending requests
//! - [`FrameworkError`] - Transport errors (closed actor, dropped reply, missing entity)
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, Mutator, ResourceRequest, Response};
