use anyhow::{anyhow, Context};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde_json::Value;
use shared::{CurrentUser, Session};

/// Read the persisted session and resolve who is signed in.
///
/// `Ok(None)` when nobody is: no stored session, or one without a profile.
pub fn load_current_user(storage_key: &str) -> anyhow::Result<Option<CurrentUser>> {
    match LocalStorage::get::<Value>(storage_key) {
        Ok(value) => {
            let session = Session::from_value(value).with_context(|| {
                format!("Session under `{}` has an unexpected shape", storage_key)
            })?;
            Ok(session.current_user())
        }
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(anyhow!("Failed to read session from local storage: {}", e)),
    }
}
