use serde::{Deserialize, Serialize};

/// Query-string parameters accepted by every paged list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page index.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

/// One page of a collection as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_page_query_defaults_apply_per_field() {
        let query: PageQuery = serde_json::from_str(r#"{"page": 3}"#).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_paginated_decodes_camel_case() {
        let page: Paginated<String> = serde_json::from_str(
            r#"{"items": ["a", "b"], "totalCount": 42, "page": 2, "totalPages": 21}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.total_count, 42);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 21);
    }
}
