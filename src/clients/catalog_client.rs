use crate::clients::GatewayError;
use crate::framework::ResourceClient;
use crate::model::{Part, PartId, PartsFilter};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Catalog lookup contract.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Returns the parts matching `filter`. Ids that do not exist are simply absent.
    async fn list_parts(&self, filter: PartsFilter) -> Result<Vec<Part>, GatewayError>;

    async fn get_part(&self, id: PartId) -> Result<Option<Part>, GatewayError>;

    /// Resolves exactly the given ids.
    async fn resolve_parts(&self, ids: &[PartId]) -> Result<Vec<Part>, GatewayError> {
        self.list_parts(PartsFilter::by_ids(ids.to_vec())).await
    }
}

/// Client for the inventory actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Part>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Part>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CatalogGateway for CatalogClient {
    #[instrument(skip(self))]
    async fn list_parts(&self, filter: PartsFilter) -> Result<Vec<Part>, GatewayError> {
        debug!("Sending request");
        let parts = self
            .inner
            .query(Box::new(move |part: &Part| filter.matches(part)))
            .await?;
        debug!(count = parts.len(), "Catalog answered");
        Ok(parts)
    }

    #[instrument(skip(self))]
    async fn get_part(&self, id: PartId) -> Result<Option<Part>, GatewayError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }
}
