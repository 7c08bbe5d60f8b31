//! DJ entity with its nested social-links record
//!
//! Earlier backend revisions exposed the nested record under two spellings,
//! `socials` and `DjSocials`. The canonical wire name is `socials`; the
//! legacy spelling is still accepted on input so older payloads keep
//! decoding, but it is never produced.

use serde::{Deserialize, Serialize};

/// Social profile links attached to a DJ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DjSocials {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub spotify: String,
    #[serde(default)]
    pub soundcloud: String,
    #[serde(default)]
    pub apple_music: String,
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub tiktok: String,
}

/// A DJ as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dj {
    pub id: i64,
    pub alias: String,
    pub profile_url: String,
    /// Backend-assigned id of the socials sub-record
    #[serde(default)]
    pub social_id: String,
    #[serde(alias = "DjSocials", skip_serializing_if = "Option::is_none")]
    pub socials: Option<DjSocials>,
}

/// Payload for `POST /djs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DjCreate {
    pub alias: String,
    pub profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<DjSocials>,
}

/// Payload for `PUT /djs/{id}` - absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DjUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<DjSocials>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_socials_spelling_decodes() {
        let json = r#"{
            "id": 7,
            "alias": "Nocturne",
            "profile_url": "https://cdn.example.com/nocturne.jpg",
            "social_id": "42",
            "DjSocials": {"instagram": "@nocturne", "spotify": "", "soundcloud": "",
                          "apple_music": "", "youtube": "", "tiktok": ""}
        }"#;
        let dj: Dj = serde_json::from_str(json).unwrap();
        let socials = dj.socials.expect("nested record should decode");
        assert_eq!(socials.instagram, "@nocturne");
    }

    #[test]
    fn test_canonical_spelling_is_produced() {
        let dj = Dj {
            id: 1,
            alias: "Marea".to_string(),
            profile_url: String::new(),
            social_id: String::new(),
            socials: Some(DjSocials::default()),
        };
        let json = serde_json::to_value(&dj).unwrap();
        assert!(json.get("socials").is_some());
        assert!(json.get("DjSocials").is_none());
    }

    #[test]
    fn test_dj_without_socials() {
        let json = r#"{"id": 2, "alias": "Kraai", "profile_url": ""}"#;
        let dj: Dj = serde_json::from_str(json).unwrap();
        assert!(dj.socials.is_none());
        assert_eq!(dj.social_id, "");
    }
}
