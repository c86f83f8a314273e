//! HTTP utilities for talking to the league store

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};

/// Header carrying the project API key on every store request.
pub const API_KEY_HEADER: &str = "apikey";

/// Build the headers every store request needs from the project API key.
///
/// The key goes out twice: as `apikey` and as a bearer token.
pub fn store_headers(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        HeaderName::from_static(API_KEY_HEADER),
        HeaderValue::from_str(api_key)?,
    );
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    bearer.set_sensitive(true);
    h.insert(AUTHORIZATION, bearer);
    Ok(h)
}

/// Header names only, for logging without leaking the key.
pub fn header_names(headers: &HeaderMap) -> Vec<String> {
    headers.keys().map(|k| k.as_str().to_string()).collect()
}
