//! Upload-signature operation
//!
//! Hands out the parameters a client needs to authorise a direct upload to
//! the media host. This endpoint doubles as the auth probe (see
//! [`ApiClient::check_auth`]); a dedicated `/auth/check` contract would be
//! cleaner, but the backend does not offer one.

use super::ApiClient;
use crate::domain::{DomainError, UploadSignature};

impl ApiClient {
    pub async fn upload_signature(&self) -> Result<UploadSignature, DomainError> {
        self.get_json("/cloudinary/signature", &[]).await
    }
}
