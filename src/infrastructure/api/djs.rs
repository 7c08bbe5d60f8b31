//! DJ operations

use reqwest::Method;

use super::ApiClient;
use crate::domain::{Dj, DjCreate, DjUpdate, DomainError};

impl ApiClient {
    /// `GET /djs` with pagination
    pub async fn list_djs(&self, skip: u32, limit: u32) -> Result<Vec<Dj>, DomainError> {
        let query = [("skip", skip.to_string()), ("limit", limit.to_string())];
        self.get_json("/djs", &query).await
    }

    pub async fn get_dj(&self, id: i64) -> Result<Dj, DomainError> {
        self.get_json(&format!("/djs/{id}"), &[]).await
    }

    pub async fn create_dj(&self, dj: &DjCreate) -> Result<Dj, DomainError> {
        self.send_json(Method::POST, "/djs", dj).await
    }

    pub async fn update_dj(&self, id: i64, dj: &DjUpdate) -> Result<Dj, DomainError> {
        self.send_json(Method::PUT, &format!("/djs/{id}"), dj).await
    }

    pub async fn delete_dj(&self, id: i64) -> Result<(), DomainError> {
        self.delete(&format!("/djs/{id}")).await
    }
}
