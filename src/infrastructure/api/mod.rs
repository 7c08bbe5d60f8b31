//! API client - the one HTTP transport every domain operation funnels through
//!
//! Two cross-cutting hooks live here. The request hook reads the current
//! credential from the session store and tags the outgoing request with the
//! `X-Admin-Password` header; absent a credential the request goes out
//! unauthenticated and the backend rejects it as it sees fit. The response
//! hook inspects every completed call and clears the credential when the
//! backend answers 401, then re-raises the authorization failure unchanged.
//! Nothing bypasses these hooks except the deliberately separate upload
//! transport in [`crate::infrastructure::media`].

mod content;
mod djs;
mod events;
mod mailing;
mod media;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::DomainError;
use crate::infrastructure::session::SessionStore;

/// Header carrying the shared admin secret on every authenticated request
pub const ADMIN_PASSWORD_HEADER: &str = "X-Admin-Password";

/// Structured error body the backend attaches to rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client bound to the fixed backend origin, with the session store
/// injected rather than reached for globally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request hook: build a request tagged with the current credential.
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.get().await {
            Some(password) => builder.header(ADMIN_PASSWORD_HEADER, password),
            None => builder,
        }
    }

    /// Response hook: send the request and map the outcome onto the error
    /// taxonomy. A 401 clears the credential before the failure propagates.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, DomainError> {
        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            debug!("backend rejected credential, clearing session");
            self.session.clear().await;
            let detail = error_detail(response).await;
            return Err(DomainError::unauthorized(detail));
        }
        if !status.is_success() {
            let detail = error_detail(response).await;
            return Err(DomainError::api(status.as_u16(), detail));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DomainError> {
        let builder = self.request(Method::GET, path).await.query(query);
        let response = self.dispatch(builder).await?;
        decode(response).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, DomainError> {
        let builder = self.request(method, path).await.json(body);
        let response = self.dispatch(builder).await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), DomainError> {
        let builder = self.request(Method::DELETE, path).await;
        self.dispatch(builder).await?;
        Ok(())
    }

    /// Auth probe: is the current credential valid against the backend right
    /// now? Success means yes; any failure, including a connectivity one,
    /// means no. Clearing on 401 is the response hook's job, not repeated
    /// here.
    pub async fn check_auth(&self) -> bool {
        self.upload_signature().await.is_ok()
    }
}

/// Pull the `detail` message out of an error body, falling back to the raw
/// text and then to the status reason.
async fn error_detail(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        if let Some(detail) = body.detail {
            return detail;
        }
    }
    if !text.is_empty() {
        return text;
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
    response
        .json()
        .await
        .map_err(|e| DomainError::decode(e.to_string()))
}
