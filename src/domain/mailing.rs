//! Mailing-list entries and page normalisation
//!
//! The list endpoint answers with either a bare JSON array or an
//! `{items, total}` envelope depending on backend revision. Callers always
//! see [`MailingListPage`]; the untagged [`MailingListResponse`] absorbs the
//! difference at the serde layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailingListEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subscribed: bool,
    pub created_at: DateTime<Utc>,
}

/// Normalised page shape every caller receives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailingListPage {
    pub items: Vec<MailingListEntry>,
    pub total: usize,
}

/// Raw wire shape of the list endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MailingListResponse {
    Envelope {
        items: Vec<MailingListEntry>,
        total: usize,
    },
    Bare(Vec<MailingListEntry>),
}

impl From<MailingListResponse> for MailingListPage {
    fn from(response: MailingListResponse) -> Self {
        match response {
            MailingListResponse::Envelope { items, total } => Self { items, total },
            MailingListResponse::Bare(items) => {
                let total = items.len();
                Self { items, total }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_json(id: i64) -> String {
        format!(
            r#"{{"id": {id}, "name": "Ada", "email": "ada@example.com",
                "subscribed": true, "created_at": "2025-06-01T12:00:00Z"}}"#
        )
    }

    #[test]
    fn test_bare_array_normalises_with_length_as_total() {
        let json = format!("[{},{},{}]", entry_json(1), entry_json(2), entry_json(3));
        let response: MailingListResponse = serde_json::from_str(&json).unwrap();
        let page = MailingListPage::from(response);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_envelope_passes_through() {
        let json = format!(r#"{{"items": [{}], "total": 57}}"#, entry_json(1));
        let response: MailingListResponse = serde_json::from_str(&json).unwrap();
        let page = MailingListPage::from(response);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 57);
    }
}
