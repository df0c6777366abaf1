//! API utilities for frontend-backend communication

/// Base URL for API requests.
///
/// The backend serves the compiled frontend itself, so API calls go to the
/// page's own origin. Returns an empty string outside a browser, which keeps
/// the URL relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
