use contracts::shared::pagination::{PageQuery, Paginated};
use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::list_state::ListState;
use crate::shared::query::client::{into_value, use_mutation, use_query, MutationHandle, QueryResult};
use crate::shared::query::key::{Domain, QueryKey};

use super::api;

pub struct UsersDomain;

impl Domain for UsersDomain {
    const TAG: &'static str = "users";
}

/// Cache namespace for the user role dictionary. Its key must never be
/// shared with the order status dictionary: the payload shapes differ.
pub struct UserRolesDomain;

impl Domain for UserRolesDomain {
    const TAG: &'static str = "user-roles";
}

pub fn use_users(filter: RwSignal<ListState<UsersDomain>>) -> QueryResult<Paginated<User>> {
    use_query(
        move || {
            let state = filter.get();
            QueryKey::page::<UsersDomain>(state.page, state.limit)
        },
        || true,
        move || {
            let state = filter.get_untracked();
            async move {
                api::fetch_users(PageQuery::new(state.page, state.limit))
                    .await
                    .map(into_value)
            }
        },
    )
}

pub fn use_user_roles() -> QueryResult<Vec<UserRole>> {
    use_query(
        || QueryKey::all::<UserRolesDomain>(),
        || true,
        || async move { api::fetch_user_roles().await.map(into_value) },
    )
}

pub fn use_delete_user() -> MutationHandle<Uuid> {
    use_mutation(
        |id: Uuid| async move { api::delete_user(id).await },
        &[UsersDomain::TAG],
        false,
    )
}
