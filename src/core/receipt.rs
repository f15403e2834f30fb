//! Receipt file selection and format validation

use crate::core::error::BilledError;
use regex::Regex;
use std::sync::OnceLock;

/// A file picked in the creation form's file input
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Original file name, extension included
    pub name: String,
    /// MIME type reported by the host, when it knows one
    pub mime: Option<String>,
    /// Raw content, forwarded untouched to the store
    pub bytes: Vec<u8>,
}

fn extension_pattern() -> &'static Regex {
    static EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();
    EXTENSION_REGEX.get_or_init(|| Regex::new(r"(?i)\.(jpe?g|png)$").unwrap())
}

/// Check a selection against the allowed receipt formats (jpg, jpeg, png).
///
/// The extension decides; the MIME type is only consulted when the name
/// carries no extension at all. Content is never inspected.
pub fn validate(file: &SelectedFile) -> Result<(), BilledError> {
    if extension_pattern().is_match(&file.name) {
        return Ok(());
    }

    if !file.name.contains('.') {
        if let Some(mime) = &file.mime {
            if matches!(mime.as_str(), "image/jpeg" | "image/png") {
                return Ok(());
            }
        }
    }

    Err(BilledError::UnsupportedReceiptFormat {
        file_name: file.name.clone(),
    })
}
