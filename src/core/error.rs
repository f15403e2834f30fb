//! Typed errors for the bill lifecycle core
//!
//! Transport failures cross the store seam as `anyhow::Error` so that the
//! rejection's message text reaches the hosting view untouched; this module
//! only covers the failures the core produces itself.

use thiserror::Error;

/// Errors raised by the bill lifecycle core
#[derive(Debug, Error)]
pub enum BilledError {
    /// The selected receipt is not a jpg/jpeg/png image
    #[error("unsupported receipt format: '{file_name}'")]
    UnsupportedReceiptFormat { file_name: String },

    /// A submission was attempted before any receipt upload succeeded
    #[error("bill submission attempted before a receipt upload completed")]
    ReceiptNotUploaded,

    /// No serialized user record under the expected session key
    #[error("no user record in session storage under key '{key}'")]
    SessionMissing { key: String },

    /// The session user record could not be parsed
    #[error("invalid user record in session storage: {message}")]
    SessionParse { message: String },
}

impl BilledError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            BilledError::UnsupportedReceiptFormat { .. } => "UNSUPPORTED_RECEIPT_FORMAT",
            BilledError::ReceiptNotUploaded => "RECEIPT_NOT_UPLOADED",
            BilledError::SessionMissing { .. } => "SESSION_MISSING",
            BilledError::SessionParse { .. } => "SESSION_PARSE",
        }
    }
}

impl From<serde_json::Error> for BilledError {
    fn from(err: serde_json::Error) -> Self {
        BilledError::SessionParse {
            message: err.to_string(),
        }
    }
}
