//! Endpoint paths for every entity service.

use contracts::shared::pagination::PageQuery;
use uuid::Uuid;

use super::api_utils::api_url;

fn page_query_string(query: PageQuery) -> String {
    serde_qs::to_string(&query).unwrap_or_default()
}

fn paged(path: &str, query: PageQuery) -> String {
    api_url(&format!("{path}?{}", page_query_string(query)))
}

pub fn orders(query: PageQuery) -> String {
    paged("/api/orders", query)
}

pub fn order(id: Uuid) -> String {
    api_url(&format!("/api/orders/{id}"))
}

pub fn order_statuses() -> String {
    api_url("/api/order-statuses")
}

pub fn clients(query: PageQuery, search: &str) -> String {
    let mut url = paged("/api/clients", query);
    if !search.is_empty() {
        url.push_str("&q=");
        url.push_str(&urlencoding::encode(search));
    }
    url
}

pub fn client(id: Uuid) -> String {
    api_url(&format!("/api/clients/{id}"))
}

pub fn constructions(query: PageQuery) -> String {
    paged("/api/constructions", query)
}

pub fn construction(id: Uuid) -> String {
    api_url(&format!("/api/constructions/{id}"))
}

pub fn glass_fill(query: PageQuery) -> String {
    paged("/api/glass-fill", query)
}

pub fn glass_fill_item(id: Uuid) -> String {
    api_url(&format!("/api/glass-fill/{id}"))
}

pub fn profile_systems() -> String {
    api_url("/api/profile-systems")
}

pub fn users(query: PageQuery) -> String {
    paged("/api/users", query)
}

pub fn user(id: Uuid) -> String {
    api_url(&format!("/api/users/{id}"))
}

pub fn user_roles() -> String {
    api_url("/api/user-roles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_string() {
        assert_eq!(
            page_query_string(PageQuery::new(2, 50)),
            "page=2&limit=50"
        );
        assert_eq!(page_query_string(PageQuery::default()), "page=1&limit=20");
    }
}
