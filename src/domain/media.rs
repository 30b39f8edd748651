//! Accessors for the few fields we read out of otherwise opaque provider JSON.
//!
//! Every accessor returns `None` when the field is absent, null, of the wrong
//! type or empty. Nothing here panics on a malformed payload.

use serde_json::Value;

use super::JsonObject;

fn non_empty_str<'a>(item: &'a JsonObject, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// First element of `results`, if it is an object
pub fn first_result(search: &JsonObject) -> Option<&JsonObject> {
    search
        .get("results")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .and_then(Value::as_object)
}

/// Movies carry `title`, TV shows and people carry `name`
pub fn display_title(item: &JsonObject) -> Option<String> {
    non_empty_str(item, "title")
        .or_else(|| non_empty_str(item, "name"))
        .map(str::to_string)
}

/// Leading four characters of `release_date` (movies) or `first_air_date` (TV)
pub fn release_year(item: &JsonObject) -> Option<String> {
    let date = non_empty_str(item, "release_date")
        .or_else(|| non_empty_str(item, "first_air_date"))?;

    if date.chars().count() < 4 {
        return None;
    }
    Some(date.chars().take(4).collect())
}
