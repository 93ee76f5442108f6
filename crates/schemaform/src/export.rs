//! Result export
//!
//! Produces the downloadable artifact for a submitted record. Writing it to
//! disk or handing it to a browser is left to the caller.

use thiserror::Error;

use crate::submit::ResultRecord;

pub const DEFAULT_FILE_NAME: &str = "form-submission.json";
pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub file_name: String,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            pretty: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize result record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An owned export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedRecord {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

pub fn export(record: &ResultRecord, config: &Config) -> Result<ExportedRecord, ExportError> {
    let contents = if config.pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(ExportedRecord {
        file_name: config.file_name.clone(),
        mime_type: JSON_MIME_TYPE,
        contents,
    })
}
