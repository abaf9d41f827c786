use contracts::shared::envelope::GlassFormation;
use contracts::shared::pagination::PageQuery;
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::list_state::ListState;
use crate::shared::query::client::{into_value, use_mutation, use_query, MutationHandle, QueryResult};
use crate::shared::query::key::{Domain, QueryKey};

use super::api;

pub struct GlassFillDomain;

impl Domain for GlassFillDomain {
    const TAG: &'static str = "glass-fill";
}

/// One page of glass-fill positions, `formation` payload included as-is.
pub fn use_glass_fills(
    filter: RwSignal<ListState<GlassFillDomain>>,
) -> QueryResult<GlassFormation> {
    use_query(
        move || {
            let state = filter.get();
            QueryKey::page::<GlassFillDomain>(state.page, state.limit)
        },
        || true,
        move || {
            let state = filter.get_untracked();
            async move {
                api::fetch_glass_fills(PageQuery::new(state.page, state.limit))
                    .await
                    .map(into_value)
            }
        },
    )
}

pub fn use_delete_glass_fill() -> MutationHandle<Uuid> {
    use_mutation(
        |id: Uuid| async move { api::delete_glass_fill(id).await },
        &[GlassFillDomain::TAG],
        false,
    )
}
