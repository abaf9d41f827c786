use contracts::domain::order::{Order, OrderStatus};
use contracts::shared::pagination::{PageQuery, Paginated};
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::error::ApiError;
use crate::shared::list_state::ListState;
use crate::shared::query::client::{into_value, use_mutation, use_query, MutationHandle, QueryResult};
use crate::shared::query::key::{Domain, QueryKey};

use super::api;

/// Cache namespace for order records and order pages.
pub struct OrdersDomain;

impl Domain for OrdersDomain {
    const TAG: &'static str = "orders";
}

/// Cache namespace for the order status dictionary. Deliberately distinct
/// from the user role dictionary even though both are small lookup lists.
pub struct OrderStatusesDomain;

impl Domain for OrderStatusesDomain {
    const TAG: &'static str = "order-statuses";
}

/// One page of orders, driven by the given filter store.
pub fn use_orders(filter: RwSignal<ListState<OrdersDomain>>) -> QueryResult<Paginated<Order>> {
    use_query(
        move || {
            let state = filter.get();
            QueryKey::page::<OrdersDomain>(state.page, state.limit)
        },
        || true,
        move || {
            let state = filter.get_untracked();
            async move {
                api::fetch_orders(PageQuery::new(state.page, state.limit))
                    .await
                    .map(into_value)
            }
        },
    )
}

/// A single order; suspended (no request, no loading state) while `id` is
/// `None`.
pub fn use_order(id: Signal<Option<Uuid>>) -> QueryResult<Order> {
    use_query(
        move || match id.get() {
            Some(id) => QueryKey::item::<OrdersDomain>(id),
            None => QueryKey::all::<OrdersDomain>(),
        },
        move || id.get().is_some(),
        move || {
            let id = id.get_untracked();
            async move {
                match id {
                    Some(id) => api::fetch_order(id).await.map(into_value),
                    // unreachable while the query is disabled
                    None => Err(ApiError::Decode("order id missing".into())),
                }
            }
        },
    )
}

pub fn use_order_statuses() -> QueryResult<Vec<OrderStatus>> {
    use_query(
        || QueryKey::all::<OrderStatusesDomain>(),
        || true,
        || async move { api::fetch_order_statuses().await.map(into_value) },
    )
}

/// Deletes an order and drops every cached order page and record.
pub fn use_delete_order() -> MutationHandle<Uuid> {
    use_mutation(
        |id: Uuid| async move { api::delete_order(id).await },
        &[OrdersDomain::TAG],
        false,
    )
}
