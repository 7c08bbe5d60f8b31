//! Direct upload transport
//!
//! Image files go straight to the backend's upload endpoint as multipart
//! bodies, not through the main API client. That path exists on purpose: the
//! upload host is a different origin, so this is a second, narrowly-scoped
//! transport with its own explicit credential-attachment step against the
//! same session store. A missing credential fails immediately, before any
//! network traffic.

use std::path::Path;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::domain::{DomainError, UploadedImage};
use crate::infrastructure::api::ADMIN_PASSWORD_HEADER;
use crate::infrastructure::session::SessionStore;

/// Client-side preflight limit, matching what the backend will accept
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct MediaUploader {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl MediaUploader {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Upload an image file and return its public URL.
    pub async fn upload_image(&self, path: &Path) -> Result<String, DomainError> {
        let Some(password) = self.session.get().await else {
            return Err(DomainError::unauthorized(
                "no credential stored, log in first",
            ));
        };

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| DomainError::validation(format!("{}: {e}", path.display())))?;
        if metadata.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::validation(format!(
                "{} exceeds the {} MiB upload limit",
                path.display(),
                MAX_IMAGE_BYTES / (1024 * 1024)
            )));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::validation(format!("{}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        debug!(file = %path.display(), size = metadata.len(), "uploading image");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| DomainError::validation(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload/image", self.base_url))
            .header(ADMIN_PASSWORD_HEADER, password)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Same credential, same lifecycle: an observed authorization
            // failure destroys it here just as it does on the main client.
            self.session.clear().await;
            return Err(DomainError::unauthorized("upload rejected"));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::api(status.as_u16(), detail));
        }

        let uploaded: UploadedImage = response
            .json()
            .await
            .map_err(|e| DomainError::decode(e.to_string()))?;

        match uploaded {
            UploadedImage {
                success: true,
                url: Some(url),
            } => {
                info!(%url, "image uploaded");
                Ok(url)
            }
            _ => Err(DomainError::decode("upload returned no valid URL")),
        }
    }
}
