use thiserror::Error;

/// Rejected handle input; raised before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a username")]
    Empty,
    #[error("Username can only contain letters, numbers, and underscores")]
    InvalidCharacters,
}

/// Failure of a single resilient GET after all attempts were used up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Network error: {0}")]
    Transport(String),
}

/// Fetch or decode failure for one upstream resource
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Failed to parse {resource} response: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Envelope whose status field was not "OK"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource} returned status {status}: {}", .comment.as_deref().unwrap_or("no comment"))]
pub struct UpstreamRejection {
    pub resource: &'static str,
    pub status: String,
    pub comment: Option<String>,
}

/// Fatal failure of the profile stage; aborts the whole lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Malformed(String),
    #[error("{0}")]
    Upstream(String),
}

impl From<ApiError> for ProfileError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Fetch(e) => ProfileError::Fetch(e),
            decode @ ApiError::Decode { .. } => ProfileError::Malformed(decode.to_string()),
        }
    }
}
