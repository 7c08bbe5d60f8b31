//! Infrastructure layer - transports, credential storage and logging

pub mod api;
pub mod auth;
pub mod logging;
pub mod media;
pub mod session;

pub use api::{ADMIN_PASSWORD_HEADER, ApiClient};
pub use auth::{AuthGate, AuthStatus};
pub use media::{MAX_IMAGE_BYTES, MediaUploader};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
