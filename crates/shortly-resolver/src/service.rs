use crate::error::ResolveError;
use jiff::Timestamp;
use shortly_core::{LinkRecord, RecordStore, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};

/// The outcome of resolving a short code.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The code is live; redirect to the contained URL.
    Redirect(String),
    /// The code has no record in the store.
    NotFound,
    /// The code had a record past its expiry; it has been deleted.
    Expired,
}

/// Resolves short codes against a [`RecordStore`], enforcing expiry.
///
/// Expiry is lazy: the first resolve that observes a record past its
/// expiry deletes it and reports [`Resolution::Expired`]; later resolves
/// see [`Resolution::NotFound`]. Two concurrent resolves may both decide
/// to delete the same expired record; the second delete is a no-op.
#[derive(Debug)]
pub struct ResolverService<S> {
    store: Arc<S>,
}

impl<S> Clone for ResolverService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore> ResolverService<S> {
    /// Creates a new `ResolverService` over a shared store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a short code to its target URL.
    ///
    /// A store fault on the expiry-triggered delete propagates rather
    /// than letting the record pass as live.
    pub async fn resolve(&self, code: &ShortCode) -> Result<Resolution, ResolveError> {
        trace!(code = %code, "resolving short code");

        let Some(bytes) = self.store.get(code).await? else {
            trace!(code = %code, "short code not found");
            return Ok(Resolution::NotFound);
        };

        let record = LinkRecord::from_bytes(&bytes)?;
        if record.is_expired_at(Timestamp::now()) {
            self.store.delete(code).await?;
            debug!(code = %code, "record expired, deleted");
            return Ok(Resolution::Expired);
        }

        debug!(code = %code, url = %record.link, "resolved short code");
        Ok(Resolution::Redirect(record.link))
    }
}
