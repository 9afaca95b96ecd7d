use crate::flatten::error::FlattenError;
use crate::flatten::text::{raw_text, resolve_text};
use crate::flatten::types::{Row, TextStrategy};
use serde_json::Value;

/// Build the 15-field output row for one parsed record.
///
/// Required keys (`id`, `created_at`, the `user` object and its fields, the
/// counters, `entities.hashtags`) are fatal when absent. The guarded optional
/// fields (`place`, `coordinates`, `in_reply_to_*`, the text chain) substitute
/// their defined defaults instead.
pub fn extract_row(record: &Value, strategy: TextStrategy) -> Result<Row, FlattenError> {
    let user = get_required(record, "user", "user")?;

    let text = match strategy {
        TextStrategy::Cascade => resolve_text(record),
        TextStrategy::RawField => raw_text(record),
    };

    let (place_full_name, place_country_code) = match present(record, "place") {
        Some(place) => (
            required_string(place, "full_name", "place.full_name")?,
            required_string(place, "country_code", "place.country_code")?,
        ),
        None => (String::new(), String::new()),
    };

    let entities = get_required(record, "entities", "entities")?;
    let hashtags = get_required(entities, "hashtags", "entities.hashtags")?
        .as_array()
        .ok_or(FlattenError::InvalidField {
            field: "entities.hashtags",
            expected: "an array",
        })?;

    let (longitude, latitude) = coordinates(record)?;

    Ok(Row {
        id: required_i64(record, "id", "id")?,
        created_at: required_string(record, "created_at", "created_at")?,
        screen_name: required_string(user, "screen_name", "user.screen_name")?,
        user_id: required_i64(user, "id", "user.id")?,
        text,
        retweet_count: required_i64(record, "retweet_count", "retweet_count")?,
        favorite_count: required_i64(record, "favorite_count", "favorite_count")?,
        in_reply_to_status_id: optional_i64(record, "in_reply_to_status_id")?,
        in_reply_to_user_id: optional_i64(record, "in_reply_to_user_id")?,
        location: required_string(user, "location", "user.location")?,
        place_full_name,
        hashtags: hashtag_texts(hashtags)?,
        place_country_code,
        longitude,
        latitude,
    })
}

/// Map hashtag entity objects to their `text` values, preserving order.
pub fn hashtag_texts(entities: &[Value]) -> Result<Vec<String>, FlattenError> {
    entities
        .iter()
        .map(|entity| match entity.get("text") {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(FlattenError::InvalidField {
                field: "entities.hashtags[].text",
                expected: "a string",
            }),
            None => Err(FlattenError::MissingField("entities.hashtags[].text")),
        })
        .collect()
}

/// The geo pair, longitude then latitude. Absent or null `coordinates`
/// yields `(None, None)`.
fn coordinates(record: &Value) -> Result<(Option<f64>, Option<f64>), FlattenError> {
    let Some(coords) = present(record, "coordinates") else {
        return Ok((None, None));
    };

    let pair = get_required(coords, "coordinates", "coordinates.coordinates")?
        .as_array()
        .ok_or(FlattenError::InvalidField {
            field: "coordinates.coordinates",
            expected: "an array",
        })?;

    let axis = |idx: usize| {
        pair.get(idx)
            .and_then(Value::as_f64)
            .ok_or(FlattenError::InvalidField {
                field: "coordinates.coordinates",
                expected: "a longitude/latitude pair of numbers",
            })
    };

    Ok((Some(axis(0)?), Some(axis(1)?)))
}

/// A key that must exist but whose value may be null.
fn get_required<'a>(
    value: &'a Value,
    key: &str,
    field: &'static str,
) -> Result<&'a Value, FlattenError> {
    value.get(key).ok_or(FlattenError::MissingField(field))
}

/// A key that is skipped entirely when absent or null.
fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

fn required_i64(value: &Value, key: &str, field: &'static str) -> Result<i64, FlattenError> {
    get_required(value, key, field)?
        .as_i64()
        .ok_or(FlattenError::InvalidField {
            field,
            expected: "an integer",
        })
}

/// Required-presence string field; a null value reads as empty.
fn required_string(value: &Value, key: &str, field: &'static str) -> Result<String, FlattenError> {
    match get_required(value, key, field)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(FlattenError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn optional_i64(value: &Value, key: &str) -> Result<Option<i64>, FlattenError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(found) => found
            .as_i64()
            .map(Some)
            .ok_or(FlattenError::InvalidField {
                field: "in_reply_to_*",
                expected: "an integer",
            }),
    }
}
