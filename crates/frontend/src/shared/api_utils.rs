//! Base-URL resolution for backend requests.

use once_cell::sync::Lazy;

/// Resolved once per session. A compile-time `SERVER_URL` wins; otherwise the
/// base is derived from the window location, with the backend on port 3000
/// next to wherever the panel itself is served from.
static SERVER_BASE: Lazy<String> = Lazy::new(|| {
    if let Some(url) = option_env!("SERVER_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
});

pub fn server_base() -> &'static str {
    &SERVER_BASE
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", server_base(), path)
}
