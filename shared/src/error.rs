use thiserror::Error;

/// Everything that can go wrong between issuing a list fetch and holding a
/// normalized page of records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
    /// The body was not the JSON shape the endpoint declares
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The envelope carried `success: false`
    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    /// A fetch that needs the signed-in user's profile ran without one
    #[error("No signed-in user")]
    MissingIdentity,
}

impl FetchError {
    /// Logical failures are answers from the backend (or the session) rather
    /// than broken plumbing.
    pub fn is_logical(&self) -> bool {
        matches!(self, FetchError::Rejected(_) | FetchError::MissingIdentity)
    }
}

/// How a failed fetch is presented to the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend answered but refused (or had nothing for) the request
    Rejected,
    /// The backend could not be reached or answered with garbage
    Unavailable,
    /// Nobody is signed in
    SignedOut,
}

/// The user-facing remainder of a [`FetchError`]. Details stay in the logs.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&FetchError> for FetchFailure {
    fn from(error: &FetchError) -> Self {
        match error {
            FetchError::Rejected(Some(reason)) if !reason.trim().is_empty() => Self {
                kind: FailureKind::Rejected,
                message: reason.trim().to_string(),
            },
            FetchError::Rejected(_) => Self {
                kind: FailureKind::Rejected,
                message: "The server could not provide these records.".to_string(),
            },
            FetchError::MissingIdentity => Self {
                kind: FailureKind::SignedOut,
                message: "Sign in to view these records.".to_string(),
            },
            FetchError::Transport(_) | FetchError::Status { .. } | FetchError::Decode(_) => Self {
                kind: FailureKind::Unavailable,
                message: "Could not load records. Please try again.".to_string(),
            },
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
