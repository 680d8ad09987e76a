//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the sales API listens on when served next to the UI.
pub const API_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8080 for the sales API.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - "http://localhost:8080" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Appends percent-encoded query pairs to `url`. Repeated keys stay repeated.
///
/// # Example
/// ```ignore
/// let url = with_query("/api/sales", &[("tag", "a b".to_string())]);
/// assert_eq!(url, "/api/sales?tag=a%20b");
/// ```
pub fn with_query(url: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return url.to_string();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}
