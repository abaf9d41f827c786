use contracts::domain::order::{Order, OrderStatus};
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::pagination::{PageQuery, Paginated};
use uuid::Uuid;

use crate::shared::endpoints;
use crate::shared::error::ApiError;
use crate::shared::http;

/// Fetch one page of orders.
pub async fn fetch_orders(query: PageQuery) -> Result<Paginated<Order>, ApiError> {
    let envelope: ApiEnvelope<Paginated<Order>> =
        http::get_json(&endpoints::orders(query)).await?;
    Ok(envelope.data)
}

/// Fetch a single order.
pub async fn fetch_order(id: Uuid) -> Result<Order, ApiError> {
    let envelope: ApiEnvelope<Order> = http::get_json(&endpoints::order(id)).await?;
    Ok(envelope.data)
}

/// Fetch the order status dictionary.
pub async fn fetch_order_statuses() -> Result<Vec<OrderStatus>, ApiError> {
    let envelope: ApiEnvelope<Vec<OrderStatus>> =
        http::get_json(&endpoints::order_statuses()).await?;
    Ok(envelope.data)
}

/// Delete an order.
pub async fn delete_order(id: Uuid) -> Result<(), ApiError> {
    http::delete(&endpoints::order(id)).await
}
