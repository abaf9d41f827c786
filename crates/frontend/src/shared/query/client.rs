use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::shared::error::ApiError;

use super::cache::{QueryCache, QueryState};
use super::key::QueryKey;

/// Shared handle to the request cache; cheap to copy into closures. The whole
/// cache is one signal, so any write makes every live subscriber re-check its
/// own key.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(QueryCache::new()),
        }
    }

    pub fn provide() {
        provide_context(Self::new());
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn invalidate(&self, key: &QueryKey) {
        log::debug!("invalidate {key}");
        let key = key.clone();
        self.cache.update(|cache| cache.invalidate(&key));
    }

    pub fn invalidate_domain(&self, tag: &'static str) {
        log::debug!("invalidate domain {tag}");
        self.cache.update(|cache| cache.invalidate_domain(tag));
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive view of one query, decoded from the cache per read.
pub struct QueryResult<T: 'static + Send + Sync> {
    pub data: Signal<Option<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<ApiError>>,
}

impl<T: 'static + Send + Sync> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static + Send + Sync> Copy for QueryResult<T> {}

/// Converts a service-layer result into the untyped form the cache stores.
pub fn into_value<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Binds a cache key to a fetch. The key and the enabled flag are reactive:
/// whenever either changes, or the key is invalidated, the fetch runs again
/// unless the key is already in flight or settled. While disabled the query
/// performs no request and reports no loading state.
pub fn use_query<T, K, E, F, Fut>(key: K, enabled: E, fetch: F) -> QueryResult<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
    K: Fn() -> QueryKey + Send + Sync + 'static,
    E: Fn() -> bool + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, ApiError>> + 'static,
{
    let client = QueryClient::expect();
    let cache = client.cache;
    let key = Memo::new(move |_| key());

    Effect::new(move |_| {
        let current = key.get();
        let wants = cache.with(|c| c.should_fetch(&current, enabled()));
        if !wants {
            return;
        }
        let started = cache
            .try_update(|c| c.begin(&current))
            .unwrap_or(false);
        if !started {
            return;
        }
        log::debug!("fetch {current}");
        let request = fetch();
        spawn_local(async move {
            match request.await {
                Ok(value) => cache.update(|c| c.complete(&current, value)),
                Err(err) => {
                    log::warn!("query {current} failed: {err}");
                    cache.update(|c| c.fail(&current, err));
                }
            }
        });
    });

    QueryResult {
        data: Signal::derive(move || {
            let current = key.get();
            cache.with(|c| match c.get(&current) {
                Some(QueryState::Ready(value)) => {
                    match serde_json::from_value::<T>(value.clone()) {
                        Ok(decoded) => Some(decoded),
                        Err(err) => {
                            log::error!("cached payload for {current} does not decode: {err}");
                            None
                        }
                    }
                }
                _ => None,
            })
        }),
        loading: Signal::derive(move || {
            let current = key.get();
            cache.with(|c| matches!(c.get(&current), Some(QueryState::Loading)))
        }),
        error: Signal::derive(move || {
            let current = key.get();
            cache.with(|c| match c.get(&current) {
                Some(QueryState::Failed(err)) => Some(err.clone()),
                _ => None,
            })
        }),
    }
}

/// Handle returned by [`use_mutation`]; copyable into event handlers.
pub struct MutationHandle<A: 'static> {
    runner: StoredValue<Rc<dyn Fn(A)>, LocalStorage>,
    pub pending: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
}

impl<A: 'static> Clone for MutationHandle<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for MutationHandle<A> {}

impl<A: 'static> MutationHandle<A> {
    pub fn run(&self, arg: A) {
        self.runner.with_value(|runner| (runner.as_ref())(arg));
    }
}

/// Binds a write operation to the cache. On success every domain in
/// `invalidate` is dropped from the cache so dependent queries refetch. A
/// failure is always surfaced through `error`; invalidating on failure is an
/// explicit per-call opt-in, not a default.
pub fn use_mutation<A, F, Fut>(
    action: F,
    invalidate: &'static [&'static str],
    invalidate_on_error: bool,
) -> MutationHandle<A>
where
    A: 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let client = QueryClient::expect();
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<ApiError>);

    let runner: Rc<dyn Fn(A)> = Rc::new(move |arg: A| {
        let request = action(arg);
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            let result = request.await;
            pending.set(false);
            match result {
                Ok(()) => {
                    for &tag in invalidate {
                        client.invalidate_domain(tag);
                    }
                }
                Err(err) => {
                    log::warn!("mutation failed: {err}");
                    if invalidate_on_error {
                        for tag in invalidate {
                            client.invalidate_domain(tag);
                        }
                    }
                    error.set(Some(err));
                }
            }
        });
    });

    MutationHandle {
        runner: StoredValue::new_local(runner),
        pending,
        error,
    }
}
