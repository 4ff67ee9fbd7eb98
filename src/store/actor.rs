use crate::framework::{FrameworkError, Mutator, ResourceActor, ResourceClient};
use crate::model::{Order, OrderId};
use crate::store::{OrderStore, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Order store whose entries are owned by a [`ResourceActor`].
///
/// Every request goes through the actor's mailbox, so mutations on any order are
/// applied one at a time.
#[derive(Clone)]
pub struct ActorOrderStore {
    inner: ResourceClient<Order>,
}

impl ActorOrderStore {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Builds the backing actor together with a store that talks to it.
    /// The caller spawns the actor's `run` future.
    pub fn spawnable(buffer: usize) -> (ResourceActor<Order>, Self) {
        let (actor, client) = ResourceActor::new(buffer);
        (actor, Self::new(client))
    }
}

fn map_error(id: &OrderId, e: FrameworkError) -> StoreError {
    match e {
        FrameworkError::NotFound(_) => StoreError::NotFound(*id),
        other => other.into(),
    }
}

#[async_trait]
impl OrderStore for ActorOrderStore {
    #[instrument(skip(self), fields(order_id = %id))]
    async fn get(&self, id: &OrderId) -> Result<Order, StoreError> {
        debug!("Sending request");
        self.inner
            .get(*id)
            .await
            .map_err(|e| map_error(id, e))?
            .ok_or(StoreError::NotFound(*id))
    }

    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn create(&self, order: Order) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.create(order).await?;
        Ok(())
    }

    #[instrument(skip(self, mutator), fields(order_id = %id))]
    async fn update(&self, id: &OrderId, mutator: Mutator<Order>) -> Result<Order, StoreError> {
        debug!("Sending request");
        self.inner
            .update(*id, mutator)
            .await
            .map_err(|e| map_error(id, e))
    }
}
