//! Event entity and request payloads

use serde::{Deserialize, Serialize};

/// Ticket availability, serialised with the exact wire strings the backend
/// stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Sold Out")]
    SoldOut,
    #[serde(rename = "Sold At The Door")]
    SoldAtTheDoor,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Available => "Available",
            Self::SoldOut => "Sold Out",
            Self::SoldAtTheDoor => "Sold At The Door",
        };
        write!(f, "{}", s)
    }
}

/// An event as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub venue_name: String,
    pub address: String,
    /// Calendar date, e.g. "2025-08-30"
    pub start_date: String,
    pub start_time: String,
    pub end_time: String,
    /// IANA time zone name the date/time fields are expressed in
    pub time_zone: String,
    pub ticket_status: TicketStatus,
    pub ticket_link: String,
    pub lineup: Vec<String>,
    pub genres: Vec<String>,
    pub description: String,
    pub poster_url: String,
    pub price: f64,
    pub currency: String,
}

/// Payload for `POST /events` - an [`Event`] without its server-assigned id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub name: String,
    pub venue_name: String,
    pub address: String,
    pub start_date: String,
    pub start_time: String,
    pub end_time: String,
    pub time_zone: String,
    pub ticket_status: TicketStatus,
    pub ticket_link: String,
    pub lineup: Vec<String>,
    pub genres: Vec<String>,
    pub description: String,
    pub poster_url: String,
    pub price: f64,
    pub currency: String,
}

/// Payload for `PUT /events/{id}` - absent fields are left untouched by the
/// backend and omitted from the JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_status: Option<TicketStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineup: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}
