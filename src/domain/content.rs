//! Keyed site-content records
//!
//! A content record is addressed by its `key` (e.g. "about_page",
//! "moving_banner") and carries a list of strings plus one free-text blob.
//! What those mean is up to the page consuming them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub key: String,
    pub string_collection: Vec<String>,
    pub big_string: String,
}

/// Payload for `POST /content`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCreate {
    pub key: String,
    pub string_collection: Vec<String>,
    pub big_string: String,
}

/// Payload for `PUT /content/{key}` - the key is the address and travels in
/// the path, never in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_collection: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_string: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_never_carries_key() {
        let update = ContentUpdate {
            big_string: Some("Welcome to Azulu.".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("key").is_none());
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
