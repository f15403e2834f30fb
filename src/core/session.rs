//! Session storage seam and the authenticated user record

use crate::core::error::BilledError;
use serde::{Deserialize, Serialize};

/// Storage key under which the host keeps the serialized user record
pub const USER_KEY: &str = "user";

/// Read surface over the host's key–value session storage.
///
/// The core only ever reads; writing the user record is the authentication
/// flow's job.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// The authenticated user's identity, as serialized by the login flow.
///
/// `email` is lenient-parsed: some hosts store an identity without one, and
/// the controllers then submit an empty owner rather than failing the whole
/// workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: String,
    #[serde(default)]
    pub email: String,
}

/// Read and parse the current user from session storage
pub fn current_user(storage: &dyn SessionStorage) -> Result<SessionUser, BilledError> {
    let raw = storage
        .get_item(USER_KEY)
        .ok_or_else(|| BilledError::SessionMissing {
            key: USER_KEY.to_string(),
        })?;
    let user = serde_json::from_str(&raw)?;
    Ok(user)
}
