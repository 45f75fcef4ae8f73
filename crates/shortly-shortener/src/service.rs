use crate::error::ShortenError;
use shortly_core::{LinkRecord, RecordStore, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// The outcome of a code assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The short code the URL maps to.
    pub code: ShortCode,
    /// The normalized URL the code redirects to.
    pub target_url: String,
}

/// Maps long URLs to short codes backed by a [`RecordStore`].
///
/// Codes are a pure function of the normalized URL, so re-submitting a
/// URL always yields the same code and writes at most one record. When
/// two distinct URLs truncate to the same code the second submission is
/// rejected rather than silently reusing or overwriting the record.
#[derive(Debug)]
pub struct ShortenerService<S> {
    store: Arc<S>,
}

impl<S> Clone for ShortenerService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore> ShortenerService<S> {
    /// Creates a new `ShortenerService` over a shared store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Assigns a short code to `target_url`.
    ///
    /// `expiry_minutes` counts from the record's creation time; 0 means
    /// the link never expires. Re-submitting an already-known URL keeps
    /// the original record (and its `created_at`/`expiry`) untouched.
    pub async fn assign(
        &self,
        target_url: &str,
        expiry_minutes: u32,
    ) -> Result<Assignment, ShortenError> {
        let normalized = Self::validate_url(target_url)?;
        let code = ShortCode::for_url(&normalized);
        trace!(code = %code, url = %normalized, "assigning short code");

        match self.store.get(&code).await? {
            Some(bytes) => {
                let existing = LinkRecord::from_bytes(&bytes)?;
                if existing.link != normalized {
                    debug!(
                        code = %code,
                        existing = %existing.link,
                        submitted = %normalized,
                        "hash collision between distinct urls"
                    );
                    return Err(ShortenError::CodeCollision(code.to_string()));
                }
                debug!(code = %code, "url already assigned, reusing code");
            }
            None => {
                let record = LinkRecord::new(normalized.clone(), expiry_minutes);
                // Two concurrent first-time submissions of the same URL may
                // both land here; last-write-wins is fine, the payloads are
                // identical modulo the creation timestamp.
                self.store.set(&code, record.to_bytes()?).await?;
                debug!(code = %code, expiry_minutes, "created link record");
            }
        }

        Ok(Assignment {
            code,
            target_url: normalized,
        })
    }

    /// Validates that the URL is absolute with an http(s) scheme and
    /// returns its normalized string form.
    fn validate_url(url: &str) -> Result<String, ShortenError> {
        if url.is_empty() {
            return Err(ShortenError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let parsed = Url::parse(url)
            .map_err(|e| ShortenError::InvalidUrl(format!("{}: {}", e, url)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ShortenError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none() {
            return Err(ShortenError::InvalidUrl(format!(
                "URL must have a host: {}",
                url
            )));
        }

        Ok(parsed.into())
    }
}
