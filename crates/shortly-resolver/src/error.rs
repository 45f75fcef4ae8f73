use shortly_core::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
