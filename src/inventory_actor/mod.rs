//! # Inventory Actor
//!
//! The parts catalog. A plain [`ResourceActor<Part>`](crate::framework::ResourceActor)
//! seeded with the static fixture in [`fixture`]; lookups and filtered listings are
//! served through [`CatalogClient`].
//!
//! ```rust
//! use checkout_orders::clients::CatalogGateway;
//! use checkout_orders::inventory_actor;
//! use checkout_orders::model::PartId;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, catalog) = inventory_actor::new(8);
//!     tokio::spawn(actor.run());
//!
//!     let part = catalog.get_part(PartId::new("part-uuid-1")).await.unwrap();
//!     assert_eq!(part.map(|p| p.price), Some(45000.0));
//! }
//! ```

pub mod fixture;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::Part;

/// Creates the inventory actor, pre-loaded with the fixture, and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Part>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::with_items(buffer_size, fixture::seed_parts());
    (actor, CatalogClient::new(generic_client))
}
