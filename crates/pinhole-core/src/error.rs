use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

/// Errors surfaced by the URL shortener.
///
/// Every failure is returned as a value to the caller; none is fatal
/// to the process.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("short url not found: {0}")]
    NotFound(String),
    #[error("short code already taken: {0}")]
    CodeConflict(String),
    #[error("no unused short code found after {0} attempts")]
    IdSpaceExhausted(u32),
}
