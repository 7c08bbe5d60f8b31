//! Azulu admin client
//!
//! Typed client and CLI for the Azulu CMS backend: events, DJs, site
//! content, the mailing list and media uploads, all behind a shared-secret
//! admin credential. The session store owns the credential lifecycle, the
//! API client tags every request with it and drops it on an authorization
//! failure, and the auth gate answers whether it is currently valid.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::warn;

use infrastructure::{ApiClient, AuthGate, FileSessionStore, MediaUploader, MemorySessionStore};
use infrastructure::session::SessionStore;

/// Everything a frontend (here: the CLI) needs, wired onto one shared
/// session store.
pub struct AdminContext {
    pub client: ApiClient,
    pub auth: AuthGate,
    pub uploader: MediaUploader,
}

/// Wire up the session store, API client, auth gate and upload transport
/// from configuration.
pub fn create_admin_context(config: &AppConfig) -> AdminContext {
    let session: Arc<dyn SessionStore> = match &config.session.file {
        Some(path) => Arc::new(FileSessionStore::new(path.clone())),
        None => match FileSessionStore::at_default_location() {
            Some(store) => Arc::new(store),
            None => {
                warn!("no platform data dir, session will not survive restarts");
                Arc::new(MemorySessionStore::new())
            }
        },
    };

    let client = ApiClient::new(config.api.base_url.clone(), session.clone());
    let auth = AuthGate::new(client.clone());
    let uploader = MediaUploader::new(config.api.upload_base_url.clone(), session);

    AdminContext {
        client,
        auth,
        uploader,
    }
}
