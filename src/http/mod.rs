//! Axum router and handlers for the order API.
//!
//! `build_router` returns the bare router; the binary attaches the trace layer
//! so tests can drive the router in process.

pub mod api_types;
pub mod error;

pub use error::ApiError;

use crate::clients::CatalogGateway;
use crate::model::{OrderId, Part, PartId, UserId};
use crate::orchestrator::OrderOrchestrator;
use api_types::{
    CreateOrderRequest, CreateOrderResponse, OrderResponse, PayOrderBody, PayOrderResponse,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Shared state handed to every handler.
pub struct AppState {
    pub orders: OrderOrchestrator,
    pub catalog: Arc<dyn CatalogGateway>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/orders", post(create_order))
        .route("/api/v1/orders/{order_uuid}", get(get_order))
        .route("/api/v1/orders/{order_uuid}/pay", post(pay_order))
        .route("/api/v1/orders/{order_uuid}/cancel", post(cancel_order))
        .route("/api/v1/parts/{part_uuid}", get(get_part))
        .with_state(state)
}

// A path id that is not a UUID cannot name a stored order.
fn parse_order_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(format!("order {} not found", raw)))
}

async fn create_order(
    State(st): State<Arc<AppState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), ApiError> {
    let Json(req) = payload?;
    let part_ids = req.part_uuids.into_iter().map(PartId).collect();
    let created = st.orders.create_order(UserId(req.user_uuid), part_ids).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn get_order(
    State(st): State<Arc<AppState>>,
    Path(order_uuid): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = parse_order_id(&order_uuid)?;
    let order = st.orders.get_order(order_id).await?;
    Ok(Json(order.into()))
}

async fn pay_order(
    State(st): State<Arc<AppState>>,
    Path(order_uuid): Path<String>,
    payload: Result<Json<PayOrderBody>, JsonRejection>,
) -> Result<Json<PayOrderResponse>, ApiError> {
    let order_id = parse_order_id(&order_uuid)?;
    let Json(body) = payload?;
    let transaction_id = st.orders.pay_order(order_id, &body.payment_method).await?;
    Ok(Json(PayOrderResponse {
        transaction_uuid: transaction_id.0,
    }))
}

async fn cancel_order(
    State(st): State<Arc<AppState>>,
    Path(order_uuid): Path<String>,
) -> Result<StatusCode, ApiError> {
    let order_id = parse_order_id(&order_uuid)?;
    st.orders.cancel_order(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_part(
    State(st): State<Arc<AppState>>,
    Path(part_uuid): Path<String>,
) -> Result<Json<Part>, ApiError> {
    st.catalog
        .get_part(PartId(part_uuid.clone()))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("part {} not found", part_uuid)))
}
