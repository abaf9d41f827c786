pub mod clients;
pub mod constructions;
pub mod glass_fill;
pub mod orders;
pub mod profile_systems;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use uuid::Uuid;

    use crate::shared::query::key::{Domain, QueryKey};
    use crate::system::users::queries::{UserRolesDomain, UsersDomain};

    use super::clients::queries::ClientsDomain;
    use super::constructions::queries::ConstructionsDomain;
    use super::glass_fill::queries::GlassFillDomain;
    use super::orders::queries::{OrderStatusesDomain, OrdersDomain};
    use super::profile_systems::queries::ProfileSystemsDomain;

    /// One entry per query binding in the app, with representative
    /// parameters. New bindings must be added here.
    fn hook_keys() -> Vec<QueryKey> {
        let id = Uuid::nil();
        vec![
            QueryKey::page::<OrdersDomain>(1, 20),                  // use_orders
            QueryKey::item::<OrdersDomain>(id),                     // use_order
            QueryKey::all::<OrderStatusesDomain>(),                 // use_order_statuses
            QueryKey::page::<ClientsDomain>(1, 20).with_param(""),  // use_clients
            QueryKey::item::<ClientsDomain>(id),                    // use_client
            QueryKey::page::<ConstructionsDomain>(1, 20),           // use_constructions
            QueryKey::item::<ConstructionsDomain>(id),              // use_construction
            QueryKey::page::<GlassFillDomain>(1, 20),               // use_glass_fills
            QueryKey::all::<ProfileSystemsDomain>(),                // use_profile_systems
            QueryKey::page::<UsersDomain>(1, 20),                   // use_users
            QueryKey::all::<UserRolesDomain>(),                     // use_user_roles
        ]
    }

    #[test]
    fn test_cache_keys_are_globally_unique() {
        let keys = hook_keys();
        let mut seen = HashSet::new();
        for key in &keys {
            assert!(seen.insert(key.clone()), "duplicate cache key: {key}");
        }
    }

    #[test]
    fn test_domain_tags_are_distinct() {
        let tags = [
            OrdersDomain::TAG,
            OrderStatusesDomain::TAG,
            ClientsDomain::TAG,
            ConstructionsDomain::TAG,
            GlassFillDomain::TAG,
            ProfileSystemsDomain::TAG,
            UsersDomain::TAG,
            UserRolesDomain::TAG,
        ];
        let unique: HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_status_and_role_dictionaries_do_not_share_a_key() {
        assert_ne!(
            QueryKey::all::<OrderStatusesDomain>(),
            QueryKey::all::<UserRolesDomain>()
        );
    }
}
