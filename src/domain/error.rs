use thiserror::Error;

/// Core domain errors
///
/// Every failure a caller can observe falls into one of these classes, so the
/// CLI can render a connectivity problem, a rejected credential and a rejected
/// request as distinct messages.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No response was obtained from the backend at all.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend rejected the credential. Raised after the session store
    /// has already been cleared by the response hook.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The backend rejected the request with a structured error body.
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// A successful response carried a body that did not match the expected shape.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The request was rejected client-side before any network traffic.
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the failure means the current credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = DomainError::api(409, "Content with key 'hero' already exists");
        assert_eq!(
            error.to_string(),
            "API error (409): Content with key 'hero' already exists"
        );
    }

    #[test]
    fn test_unauthorized_detection() {
        let error = DomainError::unauthorized("invalid admin password");
        assert!(error.is_unauthorized());
        assert!(!DomainError::network("connection refused").is_unauthorized());
    }

    #[test]
    fn test_validation_error_display() {
        let error = DomainError::validation("file exceeds 5 MiB limit");
        assert_eq!(
            error.to_string(),
            "Validation error: file exceeds 5 MiB limit"
        );
    }
}
