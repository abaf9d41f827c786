use contracts::domain::profile_system::ProfileSystem;

use crate::shared::query::client::{into_value, use_query, QueryResult};
use crate::shared::query::key::{Domain, QueryKey};

use super::api;

pub struct ProfileSystemsDomain;

impl Domain for ProfileSystemsDomain {
    const TAG: &'static str = "profile-systems";
}

pub fn use_profile_systems() -> QueryResult<Vec<ProfileSystem>> {
    use_query(
        || QueryKey::all::<ProfileSystemsDomain>(),
        || true,
        || async move { api::fetch_profile_systems().await.map(into_value) },
    )
}
