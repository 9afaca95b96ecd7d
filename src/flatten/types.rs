use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One flattened output row - the fixed 15-field projection of a tweet record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Tweet identifier
    pub id: i64,

    /// Creation timestamp, source-native format (never reformatted)
    pub created_at: String,

    /// Author handle (`user.screen_name`)
    pub screen_name: String,

    /// Author identifier (`user.id`)
    pub user_id: i64,

    /// Display text, resolved per the configured [`TextStrategy`]
    pub text: String,

    pub retweet_count: i64,
    pub favorite_count: i64,

    /// Status this record replies to, if any
    pub in_reply_to_status_id: Option<i64>,

    /// User this record replies to, if any
    pub in_reply_to_user_id: Option<i64>,

    /// Author-declared location (`user.location`), possibly empty
    pub location: String,

    /// Place name; empty when the record carries no place
    pub place_full_name: String,

    /// Hashtag texts in entity order
    pub hashtags: Vec<String>,

    /// Place country code; empty when the record carries no place
    pub place_country_code: String,

    /// Geo longitude; `None` when the record carries no coordinates
    pub longitude: Option<f64>,

    /// Geo latitude; `None` when the record carries no coordinates
    pub latitude: Option<f64>,
}

impl Row {
    /// Render the row as its 15 CSV fields, in output order.
    ///
    /// Absent reply targets render as empty fields, absent coordinates as the
    /// literal `NaN`, and the hashtag list as a compact JSON array.
    pub fn csv_fields(&self) -> [String; 15] {
        [
            self.id.to_string(),
            self.created_at.clone(),
            self.screen_name.clone(),
            self.user_id.to_string(),
            self.text.clone(),
            self.retweet_count.to_string(),
            self.favorite_count.to_string(),
            optional_id(self.in_reply_to_status_id),
            optional_id(self.in_reply_to_user_id),
            self.location.clone(),
            self.place_full_name.clone(),
            Value::from(self.hashtags.clone()).to_string(),
            self.place_country_code.clone(),
            coordinate(self.longitude),
            coordinate(self.latitude),
        ]
    }
}

fn optional_id(id: Option<i64>) -> String {
    id.map(|n| n.to_string()).unwrap_or_default()
}

fn coordinate(axis: Option<f64>) -> String {
    axis.map_or_else(|| String::from("NaN"), |n| n.to_string())
}

/// How the display text of a record is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStrategy {
    /// Full fallback cascade over extended and reposted text variants
    #[default]
    Cascade,

    /// Read the `text` key directly, ignoring extended variants
    RawField,
}

/// Configuration for a flattening run
#[derive(Debug, Clone, Default)]
pub struct FlattenConfig {
    /// Text-resolution strategy applied to every record
    pub text_strategy: TextStrategy,
}
