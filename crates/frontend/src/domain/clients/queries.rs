use contracts::domain::client::Client;
use contracts::shared::pagination::{PageQuery, Paginated};
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::error::ApiError;
use crate::shared::list_state::ListState;
use crate::shared::query::client::{into_value, use_mutation, use_query, MutationHandle, QueryResult};
use crate::shared::query::key::{Domain, QueryKey};

use super::api;

pub struct ClientsDomain;

impl Domain for ClientsDomain {
    const TAG: &'static str = "clients";
}

/// One page of clients. The (already debounced) search string is part of the
/// cache key, so each search term gets its own entry.
pub fn use_clients(
    filter: RwSignal<ListState<ClientsDomain>>,
    search: Signal<String>,
) -> QueryResult<Paginated<Client>> {
    use_query(
        move || {
            let state = filter.get();
            QueryKey::page::<ClientsDomain>(state.page, state.limit).with_param(search.get())
        },
        || true,
        move || {
            let state = filter.get_untracked();
            let search = search.get_untracked();
            async move {
                api::fetch_clients(PageQuery::new(state.page, state.limit), &search)
                    .await
                    .map(into_value)
            }
        },
    )
}

/// A single client; suspended while `id` is `None`.
pub fn use_client(id: Signal<Option<Uuid>>) -> QueryResult<Client> {
    use_query(
        move || match id.get() {
            Some(id) => QueryKey::item::<ClientsDomain>(id),
            None => QueryKey::all::<ClientsDomain>(),
        },
        move || id.get().is_some(),
        move || {
            let id = id.get_untracked();
            async move {
                match id {
                    Some(id) => api::fetch_client(id).await.map(into_value),
                    None => Err(ApiError::Decode("client id missing".into())),
                }
            }
        },
    )
}

pub fn use_delete_client() -> MutationHandle<Uuid> {
    use_mutation(
        |id: Uuid| async move { api::delete_client(id).await },
        &[ClientsDomain::TAG],
        false,
    )
}
