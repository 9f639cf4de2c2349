use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope code the API uses for success.
pub const SUCCESS_CODE: i64 = 200;

/// The `{ code, data, msg }` wrapper every endpoint responds with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub data: Option<T>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            msg: None,
        }
    }

    pub fn failure(code: i64, msg: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            msg: Some(msg.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Success with payload, or the matching error.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.into_rejection());
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Success regardless of payload (used where the body is not needed).
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.into_rejection())
        }
    }

    fn into_rejection(self) -> ApiError {
        ApiError::Rejected {
            code: self.code,
            msg: self.msg,
        }
    }
}
