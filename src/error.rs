// Error types shared by the backend adapter and the view-controllers
use thiserror::Error;

/// A failed round-trip to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx response. `message` carries the backend's own `message` field when it sent one.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Why a view-controller ended up in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewFailure {
    #[error(transparent)]
    Transport(#[from] FetchError),
    #[error("no room number provided")]
    MissingRoomNumber,
    #[error("invalid room number: {0:?}")]
    InvalidRoomNumber(String),
}
