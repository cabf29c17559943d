use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoscamError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("api error: HTTP status {code}")]
    ApiError { code: u16, body: String },

    #[error("preset id {0} is outside 1..=16")]
    PresetOutOfRange(u8),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FoscamError>;
