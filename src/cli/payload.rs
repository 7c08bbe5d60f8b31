//! Shared plumbing for create/update subcommands that take a JSON payload
//! either inline (`--json`) or from a file (`--file`).

use std::path::PathBuf;

use clap::Args;
use serde::de::DeserializeOwned;

use crate::domain::DomainError;

#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// Inline JSON payload
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,

    /// Path to a file holding the JSON payload
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

impl PayloadArgs {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, DomainError> {
        let raw = match (&self.json, &self.file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .map_err(|e| DomainError::validation(format!("{}: {e}", path.display())))?,
            (None, None) => {
                return Err(DomainError::validation(
                    "provide a payload with --json or --file",
                ));
            }
        };
        serde_json::from_str(&raw).map_err(|e| DomainError::validation(format!("bad payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentUpdate;

    #[test]
    fn test_inline_json_parses() {
        let args = PayloadArgs {
            json: Some(r#"{"big_string": "hello"}"#.to_string()),
            file: None,
        };
        let update: ContentUpdate = args.parse().unwrap();
        assert_eq!(update.big_string.as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_payload_is_a_validation_error() {
        let args = PayloadArgs {
            json: None,
            file: None,
        };
        let err = args.parse::<ContentUpdate>().unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
