use thiserror::Error;

/// Errors from vault API operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The entry (or vault) does not exist on the server. Recognized
    /// outcome, not a transport failure: Read treats it as external
    /// deletion and Delete treats it as already done.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// HTTP transport failure
    #[error("request failed: {0}")]
    Request(String),

    /// The server rejected the operation
    #[error("vault API error: {0}")]
    Api(String),

    /// Authentication with the vault failed
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The server returned a payload this client could not interpret
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Create a not-found error for an entry id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Whether this error is the not-found sentinel
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Request(err.to_string())
    }
}
