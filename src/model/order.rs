use crate::framework::ActorEntity;
use crate::model::{PartId, PaymentMethod, TransactionId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Generates a fresh, globally unique order id.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Opaque identifier of the purchaser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle states of an order. `Paid` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::PendingPayment => "PENDING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// Outcome of a successful payment. Present on an order as a whole or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub transaction_id: TransactionId,
    pub payment_method: PaymentMethod,
}

/// Represents a customer order and its payment lifecycle.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// so it can be owned by a [`ResourceActor`](crate::framework::ResourceActor) when the
/// actor-backed order store is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub part_ids: Vec<PartId>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub payment: Option<PaymentRecord>,
}

impl Order {
    /// Creates a new order awaiting payment.
    ///
    /// # Arguments
    /// * `id` - Fresh unique identifier
    /// * `user_id` - Purchaser
    /// * `part_ids` - Catalog parts, already confirmed to exist
    /// * `total_price` - Sum of the resolved part prices
    pub fn new(id: OrderId, user_id: UserId, part_ids: Vec<PartId>, total_price: f64) -> Self {
        Self {
            id,
            user_id,
            part_ids,
            total_price,
            status: OrderStatus::PendingPayment,
            payment: None,
        }
    }

    /// Moves the order to `Paid`, recording transaction and method together.
    pub fn mark_paid(&mut self, payment: PaymentRecord) {
        self.status = OrderStatus::Paid;
        self.payment = Some(payment);
    }

    pub fn mark_cancelled(&mut self) {
        self.status = OrderStatus::Cancelled;
    }

    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.payment.as_ref().map(|p| &p.transaction_id)
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment.as_ref().map(|p| p.payment_method)
    }
}

impl ActorEntity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// Result of a successful order creation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub total_price: f64,
}
