//! Mailing-list operations

use super::ApiClient;
use crate::domain::{DomainError, MailingListPage, MailingListResponse};

impl ApiClient {
    /// `GET /mailing-list` with pagination and the subscription filter.
    ///
    /// The backend answers with either a bare array or an `{items, total}`
    /// envelope; both normalise to [`MailingListPage`] here so callers never
    /// see the difference.
    pub async fn list_mailing(
        &self,
        skip: u32,
        limit: u32,
        subscribed_only: bool,
    ) -> Result<MailingListPage, DomainError> {
        let query = [
            ("skip", skip.to_string()),
            ("limit", limit.to_string()),
            ("subscribed_only", subscribed_only.to_string()),
        ];
        let response: MailingListResponse = self.get_json("/mailing-list", &query).await?;
        Ok(response.into())
    }

    pub async fn delete_mailing_entry(&self, id: i64) -> Result<(), DomainError> {
        self.delete(&format!("/mailing-list/{id}")).await
    }
}
