//! Media upload types
//!
//! The signature endpoint hands out parameters for client-authorised uploads
//! to the media host; the image endpoint is the backend's own direct upload.
//! Wire names for the signature are camelCase per the backend contract.

use serde::{Deserialize, Serialize};

/// Parameters authorising a direct upload to the media host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSignature {
    pub signature: String,
    pub timestamp: i64,
    #[serde(rename = "cloudName")]
    pub cloud_name: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Result of posting an image to the upload endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,
}
