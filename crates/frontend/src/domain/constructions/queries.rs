use contracts::domain::construction::Construction;
use contracts::shared::pagination::{PageQuery, Paginated};
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::orders::queries::OrdersDomain;
use crate::shared::error::ApiError;
use crate::shared::list_state::ListState;
use crate::shared::query::client::{into_value, use_mutation, use_query, MutationHandle, QueryResult};
use crate::shared::query::key::{Domain, QueryKey};

use super::api;

pub struct ConstructionsDomain;

impl Domain for ConstructionsDomain {
    const TAG: &'static str = "constructions";
}

pub fn use_constructions(
    filter: RwSignal<ListState<ConstructionsDomain>>,
) -> QueryResult<Paginated<Construction>> {
    use_query(
        move || {
            let state = filter.get();
            QueryKey::page::<ConstructionsDomain>(state.page, state.limit)
        },
        || true,
        move || {
            let state = filter.get_untracked();
            async move {
                api::fetch_constructions(PageQuery::new(state.page, state.limit))
                    .await
                    .map(into_value)
            }
        },
    )
}

/// A single construction; suspended while `id` is `None`.
pub fn use_construction(id: Signal<Option<Uuid>>) -> QueryResult<Construction> {
    use_query(
        move || match id.get() {
            Some(id) => QueryKey::item::<ConstructionsDomain>(id),
            None => QueryKey::all::<ConstructionsDomain>(),
        },
        move || id.get().is_some(),
        move || {
            let id = id.get_untracked();
            async move {
                match id {
                    Some(id) => api::fetch_construction(id).await.map(into_value),
                    None => Err(ApiError::Decode("construction id missing".into())),
                }
            }
        },
    )
}

/// Deleting a construction changes its order's totals, so cached orders are
/// dropped together with the construction pages.
pub fn use_delete_construction() -> MutationHandle<Uuid> {
    use_mutation(
        |id: Uuid| async move { api::delete_construction(id).await },
        &[ConstructionsDomain::TAG, OrdersDomain::TAG],
        false,
    )
}
