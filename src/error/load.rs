use thiserror::Error;

use crate::traits::HttpError;

/// Shown when a failure carries no usable message of its own.
pub const FALLBACK_MESSAGE: &str = "지역 정보를 불러올 수 없습니다.";

/// Failure of the region metadata fetch.
///
/// `Display` is the human-readable message surfaced in the map panel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    /// Network or transport failure before a response arrived.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("API 요청 실패: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The body was not a valid region metadata document.
    #[error("{0}")]
    MalformedBody(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

impl LoadError {
    /// The message stored in the selection store's `error` field.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<HttpError> for LoadError {
    fn from(err: HttpError) -> Self {
        LoadError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedBody(err.to_string())
    }
}
