//! Auth gate - turns "do we have a credential" into "is it currently valid"
//!
//! Validity is only ever established by a successful round-trip to a
//! protected endpoint; the mere presence of a stored credential proves
//! nothing. The lifecycle is a small re-enterable machine:
//!
//! ```text
//! Unauthenticated --login(password)--> Checking --probe ok--> Authenticated
//!                                      Checking --probe fails--> Unauthenticated (candidate discarded)
//! Authenticated --logout--> Unauthenticated
//! Authenticated --401 on any call--> Unauthenticated (cleared by the client's response hook)
//! ```
//!
//! On process start [`AuthGate::resume`] enters Checking automatically when a
//! durable credential exists.

use std::sync::Mutex;

use tracing::{debug, info};

use crate::infrastructure::api::ApiClient;

/// Where the session currently stands in the login lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Checking,
    Authenticated,
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Checking => "checking",
            Self::Authenticated => "authenticated",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct AuthGate {
    client: ApiClient,
    status: Mutex<AuthStatus>,
}

impl AuthGate {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            status: Mutex::new(AuthStatus::Unauthenticated),
        }
    }

    fn set_status(&self, status: AuthStatus) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = status;
    }

    /// Current lifecycle state. A credential cleared out from under us by
    /// the response hook (reactive 401) demotes Authenticated on the spot.
    pub async fn status(&self) -> AuthStatus {
        let status = *self.status.lock().unwrap_or_else(|e| e.into_inner());
        if status == AuthStatus::Authenticated && self.client.session().get().await.is_none() {
            self.set_status(AuthStatus::Unauthenticated);
            return AuthStatus::Unauthenticated;
        }
        status
    }

    /// Submit a candidate password: store it, probe the backend, keep it only
    /// if the probe succeeds.
    pub async fn login(&self, password: &str) -> bool {
        self.set_status(AuthStatus::Checking);
        self.client.session().set(password).await;

        if self.client.check_auth().await {
            info!("login accepted");
            self.set_status(AuthStatus::Authenticated);
            true
        } else {
            // Candidate discarded. On a 401 the response hook already
            // cleared it; clear() is idempotent so this also covers probe
            // failures that never reached the backend.
            self.client.session().clear().await;
            self.set_status(AuthStatus::Unauthenticated);
            debug!("login rejected, candidate credential discarded");
            false
        }
    }

    /// Explicit logout: clear the credential, no backend call.
    pub async fn logout(&self) {
        self.client.session().clear().await;
        self.set_status(AuthStatus::Unauthenticated);
        info!("logged out");
    }

    /// Process-start path: if a durable credential exists, validate it
    /// against the backend; otherwise stay unauthenticated without any
    /// network traffic.
    ///
    /// A probe that fails for non-authorization reasons (backend down) does
    /// not clear the stored credential; only the response hook's 401
    /// handling does that.
    pub async fn resume(&self) -> bool {
        if self.client.session().get().await.is_none() {
            self.set_status(AuthStatus::Unauthenticated);
            return false;
        }

        self.set_status(AuthStatus::Checking);
        let valid = self.check().await;
        self.set_status(if valid {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        });
        valid
    }

    /// Probe the backend with the current credential. Success means valid;
    /// any failure, including a connectivity one, means not valid. The gate
    /// never clears the credential here - that side effect belongs to the
    /// client's response hook alone.
    pub async fn check(&self) -> bool {
        self.client.check_auth().await
    }
}
