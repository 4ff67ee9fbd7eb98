//! # Order Orchestrator
//!
//! Owns the order state machine:
//!
//! ```text
//! (create) ──> PENDING_PAYMENT ──pay──> PAID
//!                    │
//!                    └──cancel──> CANCELLED
//! ```
//!
//! `PAID` and `CANCELLED` are terminal. Collaborator calls are made before the
//! store mutation and never while a store lock is held, so a payment and a
//! cancellation racing on the same order resolve as last writer wins.

pub mod error;

pub use error::OrderError;

use crate::clients::{CatalogGateway, PaymentGateway};
use crate::model::{
    Order, OrderCreated, OrderId, OrderStatus, PartId, PayOrderRequest, PaymentMethod,
    PaymentRecord, TransactionId, UserId,
};
use crate::store::OrderStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Coordinates the order store with the catalog and payment collaborators.
#[derive(Clone)]
pub struct OrderOrchestrator {
    store: Arc<dyn OrderStore>,
    catalog: Arc<dyn CatalogGateway>,
    payments: Arc<dyn PaymentGateway>,
}

impl OrderOrchestrator {
    pub fn new(
        store: Arc<dyn OrderStore>,
        catalog: Arc<dyn CatalogGateway>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            store,
            catalog,
            payments,
        }
    }

    /// Creates an order awaiting payment.
    ///
    /// Every requested part must exist in the catalog; the first missing one fails
    /// the request and nothing is stored. The total is the sum of the prices the
    /// catalog returned.
    #[instrument(skip(self, part_ids), fields(parts = part_ids.len()))]
    pub async fn create_order(
        &self,
        user_id: UserId,
        part_ids: Vec<PartId>,
    ) -> Result<OrderCreated, OrderError> {
        if user_id.0.trim().is_empty() {
            return Err(OrderError::InvalidRequest("user_uuid is required".to_string()));
        }
        if part_ids.is_empty() {
            return Err(OrderError::InvalidRequest(
                "part_uuids must not be empty".to_string(),
            ));
        }

        let parts = self.catalog.resolve_parts(&part_ids).await?;
        let found: HashSet<&PartId> = parts.iter().map(|p| &p.id).collect();
        if let Some(missing) = part_ids.iter().find(|id| !found.contains(id)) {
            warn!(part_id = %missing, "Requested part not in catalog");
            return Err(OrderError::InvalidRequest(format!(
                "part {} not found",
                missing
            )));
        }

        let total_price: f64 = parts.iter().map(|p| p.price).sum();
        let order = Order::new(OrderId::new_v4(), user_id, part_ids, total_price);
        let order_id = order.id;
        self.store.create(order).await?;

        info!(%order_id, total_price, "Order created");
        Ok(OrderCreated {
            order_id,
            total_price,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        Ok(self.store.get(&order_id).await?)
    }

    /// Authorizes payment and moves the order to `PAID`.
    ///
    /// Only a `PENDING_PAYMENT` order is sent to the payment executor. When the
    /// executor fails the order is left untouched so the caller can retry.
    #[instrument(skip(self))]
    pub async fn pay_order(
        &self,
        order_id: OrderId,
        payment_method: &str,
    ) -> Result<TransactionId, OrderError> {
        let order = self.store.get(&order_id).await?;
        if order.status != OrderStatus::PendingPayment {
            return Err(OrderError::Conflict(format!(
                "order {} is {} and cannot be paid",
                order_id, order.status
            )));
        }

        let payment_method = PaymentMethod::from_label(payment_method);
        let transaction_id = self
            .payments
            .pay_order(PayOrderRequest {
                order_id,
                user_id: order.user_id,
                payment_method,
            })
            .await?;

        let payment = PaymentRecord {
            transaction_id: transaction_id.clone(),
            payment_method,
        };
        self.store
            .update(&order_id, Box::new(move |o: &mut Order| o.mark_paid(payment)))
            .await?;

        info!(%order_id, %transaction_id, "Order paid");
        Ok(transaction_id)
    }

    /// Moves the order to `CANCELLED`. Cancelling a cancelled order is a no-op
    /// success; cancelling a paid order is a conflict.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        let order = self.store.get(&order_id).await?;
        match order.status {
            OrderStatus::Paid => Err(OrderError::Conflict(format!(
                "order {} is already paid and cannot be cancelled",
                order_id
            ))),
            OrderStatus::Cancelled => {
                debug!(%order_id, "Order already cancelled");
                Ok(())
            }
            OrderStatus::PendingPayment => {
                self.store
                    .update(&order_id, Box::new(|o: &mut Order| o.mark_cancelled()))
                    .await?;
                info!(%order_id, "Order cancelled");
                Ok(())
            }
        }
    }
}
