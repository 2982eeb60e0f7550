//! Public-facing address of this host.

use crate::core::http::HttpGet;
use crate::error::NetError;

/// Fetches the public address from a plain-text "what is my IP" service.
///
/// The body is returned verbatim, without trimming or validation.
///
/// # Errors
///
/// Returns [`NetError`] if the request or the body read fails.
pub fn fetch_public_ip(http: &dyn HttpGet, url: &str) -> Result<String, NetError> {
    http.get_text(url)
}
