use crate::error::Result;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// A key-value store for serialized link records.
///
/// The store is TTL-agnostic: it keeps whatever bytes it is given until
/// told to delete them. Expiry is enforced by the resolver at read time,
/// never by the store itself.
///
/// Implementations must provide per-key linearizable get/set/delete.
/// No cross-key transactions are assumed.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Retrieves the stored bytes for a short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, key: &ShortCode) -> Result<Option<Vec<u8>>>;

    /// Stores bytes under a short code, overwriting any existing value.
    async fn set(&self, key: &ShortCode, value: Vec<u8>) -> Result<()>;

    /// Deletes the value for a short code.
    /// Returns `true` if a value existed and was removed.
    async fn delete(&self, key: &ShortCode) -> Result<bool>;

    /// Checks whether a short code currently has a value.
    async fn exists(&self, key: &ShortCode) -> Result<bool>;
}
