use shortly_core::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("short code '{0}' is already assigned to a different url")]
    CodeCollision(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
