//! Display-text resolution for tweet records.
//!
//! A captured record can carry up to four representations of its text:
//! truncated or extended, its own or that of a reposted original. Resolution
//! walks a fixed priority list and takes the first source whose key path is
//! present, so a record never fails for lacking text variants.

use serde_json::Value;

/// Key paths for the display text, highest priority first. Extended text of a
/// reposted original wins over the repost's own text, and extended forms win
/// over the legacy truncated ones.
const TEXT_SOURCES: [&[&str]; 6] = [
    &["retweeted_status", "extended_tweet", "full_text"],
    &["retweeted_status", "full_text"],
    &["extended_tweet", "full_text"],
    &["full_text"],
    &["retweeted_status", "text"],
    &["text"],
];

/// Resolve the display text of a record through the fallback cascade.
///
/// The first source whose full key path exists wins, even if its value is
/// null (a null value renders as the empty string). When no source is
/// present the result is the empty string.
pub fn resolve_text(record: &Value) -> String {
    TEXT_SOURCES
        .iter()
        .find_map(|path| lookup(record, path))
        .map(text_value)
        .unwrap_or_default()
}

/// Read the `text` key directly, bypassing the cascade.
pub fn raw_text(record: &Value) -> String {
    record.get("text").map(text_value).unwrap_or_default()
}

/// Walk a key path, stopping with `None` at the first absent key.
fn lookup<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(record, |value, key| value.get(key))
}

fn text_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
