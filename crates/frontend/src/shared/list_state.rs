use std::marker::PhantomData;

use leptos::prelude::*;

use super::query::key::Domain;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Paging filter for one entity domain. The marker type makes each domain's
/// store a distinct context entry, so stores never alias across domains.
#[derive(Debug)]
pub struct ListState<D: Domain> {
    pub page: u32,
    pub limit: u32,
    _domain: PhantomData<D>,
}

impl<D: Domain> Default for ListState<D> {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            _domain: PhantomData,
        }
    }
}

impl<D: Domain> Clone for ListState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Domain> Copy for ListState<D> {}

impl<D: Domain> ListState<D> {
    /// Unconditional; range checks against the fetched page count are the
    /// caller's responsibility.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Does not touch `page`; the server clamps out-of-range pages.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }
}

/// One store per domain, created where the domain's lifetime starts: the
/// app root for stores shared across views, a component for local ones.
pub fn create_state<D: Domain>() -> RwSignal<ListState<D>> {
    RwSignal::new(ListState::default())
}

/// The store provided for `D` via context.
pub fn use_list_state<D: Domain>() -> RwSignal<ListState<D>> {
    expect_context::<RwSignal<ListState<D>>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Apples;
    impl Domain for Apples {
        const TAG: &'static str = "apples";
    }

    struct Pears;
    impl Domain for Pears {
        const TAG: &'static str = "pears";
    }

    #[test]
    fn test_defaults() {
        let state = ListState::<Apples>::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 20);
    }

    #[test]
    fn test_set_page_leaves_limit_alone() {
        let mut state = ListState::<Apples>::default();
        state.set_page(7);
        assert_eq!(state.page, 7);
        assert_eq!(state.limit, 20);
    }

    #[test]
    fn test_set_limit_leaves_page_alone() {
        let mut state = ListState::<Apples>::default();
        state.set_page(5);
        state.set_limit(100);
        assert_eq!(state.page, 5);
        assert_eq!(state.limit, 100);
    }

    #[test]
    fn test_stores_are_independent_across_domains() {
        let mut apples = ListState::<Apples>::default();
        let pears = ListState::<Pears>::default();
        apples.set_page(9);
        assert_eq!(apples.page, 9);
        assert_eq!(pears.page, 1);
    }
}
