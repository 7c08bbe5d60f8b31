//! Event operations

use reqwest::Method;

use super::ApiClient;
use crate::domain::{DomainError, Event, EventCreate, EventUpdate};

impl ApiClient {
    /// `GET /events` with pagination and the upcoming-only filter
    pub async fn list_events(
        &self,
        skip: u32,
        limit: u32,
        upcoming: bool,
    ) -> Result<Vec<Event>, DomainError> {
        let query = [
            ("skip", skip.to_string()),
            ("limit", limit.to_string()),
            ("upcoming", upcoming.to_string()),
        ];
        self.get_json("/events", &query).await
    }

    pub async fn get_event(&self, id: i64) -> Result<Event, DomainError> {
        self.get_json(&format!("/events/{id}"), &[]).await
    }

    pub async fn create_event(&self, event: &EventCreate) -> Result<Event, DomainError> {
        self.send_json(Method::POST, "/events", event).await
    }

    pub async fn update_event(
        &self,
        id: i64,
        event: &EventUpdate,
    ) -> Result<Event, DomainError> {
        self.send_json(Method::PUT, &format!("/events/{id}"), event)
            .await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), DomainError> {
        self.delete(&format!("/events/{id}")).await
    }
}
