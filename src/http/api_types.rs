//! JSON request and response bodies of the order API.

use crate::model::{Order, OrderCreated, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_uuid: String,
    #[serde(default)]
    pub part_uuids: Vec<String>,
}

/// Body of `201 Created`. The new order's id is reported as `uuid`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderResponse {
    pub uuid: String,
    pub total_price: f64,
}

impl From<OrderCreated> for CreateOrderResponse {
    fn from(created: OrderCreated) -> Self {
        Self {
            uuid: created.order_id.to_string(),
            total_price: created.total_price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PayOrderBody {
    #[serde(default)]
    pub payment_method: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PayOrderResponse {
    pub transaction_uuid: String,
}

/// Full order record. Payment fields are omitted until the order is paid.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderResponse {
    pub order_uuid: String,
    pub user_uuid: String,
    pub part_uuids: Vec<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transaction_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payment_method: Option<PaymentMethod>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let (transaction_uuid, payment_method) = match order.payment {
            Some(payment) => (
                Some(payment.transaction_id.0),
                Some(payment.payment_method),
            ),
            None => (None, None),
        };
        Self {
            order_uuid: order.id.to_string(),
            user_uuid: order.user_id.0,
            part_uuids: order.part_ids.into_iter().map(|id| id.0).collect(),
            total_price: order.total_price,
            status: order.status,
            transaction_uuid,
            payment_method,
        }
    }
}
