use std::collections::HashMap;

use serde_json::Value;

use crate::shared::error::ApiError;

use super::key::QueryKey;

/// Lifecycle of one cache entry.
#[derive(Debug, Clone)]
pub enum QueryState {
    /// A fetch is in flight.
    Loading,
    /// Last fetch succeeded; the payload is kept untyped and decoded per read.
    Ready(Value),
    /// Last fetch failed; stays until the key is invalidated.
    Failed(ApiError),
}

/// Keyed request cache. Plain data, no reactivity: the reactive wrapper lives
/// in `client`, which keeps the fetch policy testable off the wasm target.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, QueryState>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a subscriber with this key should start a fetch. A disabled
    /// query never fetches; a key that is loading or already settled does not
    /// fetch again until invalidated.
    pub fn should_fetch(&self, key: &QueryKey, enabled: bool) -> bool {
        enabled && !self.entries.contains_key(key)
    }

    /// Marks the key in-flight. Returns false when another subscriber beat us
    /// to it, so at most one request per key is ever started.
    pub fn begin(&mut self, key: &QueryKey) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.clone(), QueryState::Loading);
        true
    }

    pub fn complete(&mut self, key: &QueryKey, value: Value) {
        self.entries.insert(key.clone(), QueryState::Ready(value));
    }

    pub fn fail(&mut self, key: &QueryKey, error: ApiError) {
        self.entries.insert(key.clone(), QueryState::Failed(error));
    }

    pub fn get(&self, key: &QueryKey) -> Option<&QueryState> {
        self.entries.get(key)
    }

    /// Drops one entry; live subscribers refetch on their next look.
    pub fn invalidate(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Drops every entry of a domain, all pages and single records alike.
    pub fn invalidate_domain(&mut self, tag: &str) {
        self.entries.retain(|key, _| key.tag() != tag);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::shared::query::key::Domain;

    struct Widgets;
    impl Domain for Widgets {
        const TAG: &'static str = "widgets";
    }

    struct Gadgets;
    impl Domain for Gadgets {
        const TAG: &'static str = "gadgets";
    }

    /// Drives the cache the way a subscriber effect does and counts how many
    /// fetches would actually hit the network.
    fn poll(cache: &mut QueryCache, key: &QueryKey, enabled: bool) -> bool {
        cache.should_fetch(key, enabled) && cache.begin(key)
    }

    #[test]
    fn test_disabled_query_never_fetches() {
        let mut cache = QueryCache::new();
        let key = QueryKey::item::<Widgets>("a1");

        for _ in 0..3 {
            assert!(!poll(&mut cache, &key, false));
        }
        assert!(cache.get(&key).is_none(), "no loading state while disabled");

        // enabling triggers exactly one fetch
        assert!(poll(&mut cache, &key, true));
        assert!(!poll(&mut cache, &key, true));
    }

    #[test]
    fn test_in_flight_requests_are_deduplicated() {
        let mut cache = QueryCache::new();
        let key = QueryKey::page::<Widgets>(1, 20);

        assert!(cache.begin(&key));
        assert!(!cache.begin(&key));
        assert!(matches!(cache.get(&key), Some(QueryState::Loading)));
    }

    #[test]
    fn test_settled_entries_do_not_refetch_until_invalidated() {
        let mut cache = QueryCache::new();
        let key = QueryKey::page::<Widgets>(1, 20);

        assert!(poll(&mut cache, &key, true));
        cache.complete(&key, json!([1, 2, 3]));
        assert!(!poll(&mut cache, &key, true));

        cache.invalidate(&key);
        assert!(poll(&mut cache, &key, true));
    }

    #[test]
    fn test_failed_entries_keep_the_error() {
        let mut cache = QueryCache::new();
        let key = QueryKey::all::<Widgets>();

        cache.begin(&key);
        cache.fail(&key, ApiError::Network("timeout".into()));
        match cache.get(&key) {
            Some(QueryState::Failed(err)) => {
                assert_eq!(*err, ApiError::Network("timeout".into()))
            }
            other => panic!("expected failed entry, got {other:?}"),
        }
        // a failure is sticky until someone invalidates
        assert!(!poll(&mut cache, &key, true));
    }

    #[test]
    fn test_invalidate_domain_spares_other_domains() {
        let mut cache = QueryCache::new();
        let widgets_page = QueryKey::page::<Widgets>(1, 20);
        let widgets_item = QueryKey::item::<Widgets>("a1");
        let gadgets_page = QueryKey::page::<Gadgets>(1, 20);

        cache.complete(&widgets_page, json!([]));
        cache.complete(&widgets_item, json!({}));
        cache.complete(&gadgets_page, json!([]));

        cache.invalidate_domain(Widgets::TAG);

        assert!(cache.get(&widgets_page).is_none());
        assert!(cache.get(&widgets_item).is_none());
        assert!(cache.get(&gadgets_page).is_some());
    }
}
