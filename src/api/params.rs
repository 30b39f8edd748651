//! Query-string access for the handlers.
//!
//! A key may appear more than once (`?type=movie&type=tv`). Only its first
//! occurrence is used, so repeated keys never fail the request.

use url::form_urlencoded;

/// First value of `key` in a raw query string, percent-decoded
pub fn first_value(raw: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(raw?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
