use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status without a readable envelope.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The envelope reported a non-success code.
    #[error("rejected with code {code}: {}", .msg.as_deref().unwrap_or("<no message>"))]
    Rejected { code: i64, msg: Option<String> },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Success envelope without the `data` payload the endpoint requires.
    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// Message the server attached to a rejection, if it sent a non-blank one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { msg: Some(m), .. } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}
