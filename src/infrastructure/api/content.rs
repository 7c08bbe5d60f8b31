//! Content operations
//!
//! Content records are addressed by key, not id, so updates and deletes
//! travel the key in the path.

use reqwest::Method;

use super::ApiClient;
use crate::domain::{Content, ContentCreate, ContentUpdate, DomainError};

impl ApiClient {
    pub async fn list_content(&self, skip: u32, limit: u32) -> Result<Vec<Content>, DomainError> {
        let query = [("skip", skip.to_string()), ("limit", limit.to_string())];
        self.get_json("/content", &query).await
    }

    pub async fn get_content(&self, key: &str) -> Result<Content, DomainError> {
        self.get_json(&format!("/content/{key}"), &[]).await
    }

    pub async fn create_content(&self, content: &ContentCreate) -> Result<Content, DomainError> {
        self.send_json(Method::POST, "/content", content).await
    }

    pub async fn update_content(
        &self,
        key: &str,
        content: &ContentUpdate,
    ) -> Result<Content, DomainError> {
        self.send_json(Method::PUT, &format!("/content/{key}"), content)
            .await
    }

    pub async fn delete_content(&self, key: &str) -> Result<(), DomainError> {
        self.delete(&format!("/content/{key}")).await
    }
}
