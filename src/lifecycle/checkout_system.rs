use crate::clients::{CatalogClient, PaymentClient};
use crate::http::{build_router, AppState};
use crate::inventory_actor;
use crate::lifecycle::config::{AppConfig, StoreBackend};
use crate::orchestrator::OrderOrchestrator;
use crate::payment_actor::PaymentActor;
use crate::store::{ActorOrderStore, InMemoryOrderStore, OrderStore};
use std::sync::Arc;
use tracing::{error, info};

/// The running checkout system: collaborator actors, the order store and the
/// orchestrator wired on top of them.
///
/// ```ignore
/// let system = CheckoutSystem::new(&AppConfig::default());
/// let created = system.orchestrator.create_order(user_id, part_ids).await?;
/// system.shutdown().await?;
/// ```
pub struct CheckoutSystem {
    pub orchestrator: OrderOrchestrator,
    pub catalog: CatalogClient,
    pub payments: PaymentClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CheckoutSystem {
    /// Spawns the inventory and payment actors, plus the order actor when the
    /// actor store backend is selected. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let buffer = config.channel_buffer;

        let (inventory, catalog) = inventory_actor::new(buffer);
        let (payment, payments) = PaymentActor::new(buffer);
        let mut handles = vec![tokio::spawn(inventory.run()), tokio::spawn(payment.run())];

        let store: Arc<dyn OrderStore> = match config.store_backend {
            StoreBackend::Memory => Arc::new(InMemoryOrderStore::new()),
            StoreBackend::Actor => {
                let (actor, store) = ActorOrderStore::spawnable(buffer);
                handles.push(tokio::spawn(actor.run()));
                Arc::new(store)
            }
        };
        info!(backend = ?config.store_backend, "Checkout system started");

        let orchestrator = OrderOrchestrator::new(
            store,
            Arc::new(catalog.clone()),
            Arc::new(payments.clone()),
        );

        Self {
            orchestrator,
            catalog,
            payments,
            handles,
        }
    }

    /// Router over this system. The router holds client clones, so it must be
    /// dropped before [`shutdown`](Self::shutdown) can complete.
    pub fn router(&self) -> axum::Router {
        build_router(Arc::new(AppState {
            orders: self.orchestrator.clone(),
            catalog: Arc::new(self.catalog.clone()),
        }))
    }

    /// Drops every client owned by the system and waits for the actors to drain.
    ///
    /// Returns `Err` if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Actors exit once the last sender of their channel is gone.
        drop(self.orchestrator);
        drop(self.catalog);
        drop(self.payments);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
