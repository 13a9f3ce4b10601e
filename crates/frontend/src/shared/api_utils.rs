//! API utilities for talking to the generation server.
//!
//! The endpoint is normally baked in at build time (see
//! [`crate::shared::config::AppConfig`]); these helpers derive the dev
//! fallback from the current window location.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the generation server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
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
}

/// Fallback generation endpoint for builds without a baked-in URL:
/// the generation server on port 3000 of the current host.
pub fn default_endpoint() -> String {
    format!("{}/api/generate", api_base())
}
