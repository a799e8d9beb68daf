use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::records::lenient;

/// The signed-in user as persisted by the login flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Student or tutor profile the user acts as
    #[serde(default, deserialize_with = "lenient::id")]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Identity handed to views that fetch per-user data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub profile_id: String,
}

impl Session {
    /// Parse the persisted session. State-container snapshots wrap the
    /// session in `{"state": {...}, "version": n}`; both forms are accepted.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value.get("state") {
            Some(state) if state.is_object() => serde_json::from_value(state.clone()),
            _ => serde_json::from_value(value),
        }
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user
            .as_ref()
            .and_then(|user| user.profile_id.clone())
            .map(|profile_id| CurrentUser { profile_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_session() {
        let raw = r#"{"user":{"profile_id":"stu-17","name":"Hina","role":"student"}}"#;
        let session = Session::from_json(raw).unwrap();
        assert_eq!(
            session.current_user(),
            Some(CurrentUser { profile_id: "stu-17".to_string() })
        );
    }

    #[test]
    fn test_wrapped_session_with_numeric_id() {
        let raw = r#"{"state":{"user":{"profile_id":17},"token":"abc"},"version":0}"#;
        let session = Session::from_json(raw).unwrap();
        assert_eq!(session.current_user().map(|u| u.profile_id), Some("17".to_string()));
    }

    #[test]
    fn test_session_without_profile() {
        assert_eq!(Session::from_json(r#"{"user":null}"#).unwrap().current_user(), None);
        assert_eq!(Session::from_json(r#"{}"#).unwrap().current_user(), None);
        assert_eq!(
            Session::from_json(r#"{"user":{"profile_id":""}}"#).unwrap().current_user(),
            None
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(Session::from_json("not json").is_err());
    }
}
