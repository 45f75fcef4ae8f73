use crate::error::StoreError;
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// The unit of persisted state: one shortened link.
///
/// Serialized for storage as a JSON object with `link`, `created_at`
/// (ISO-8601 timestamp string), and `expiry` (integer minutes) keys.
/// The encoding round-trips exactly through [`LinkRecord::to_bytes`] and
/// [`LinkRecord::from_bytes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The original URL that was shortened.
    pub link: String,
    /// When the record was created. Set once, never mutated.
    pub created_at: Timestamp,
    /// Minutes until expiry, counted from `created_at`. 0 means never.
    pub expiry: u32,
}

impl LinkRecord {
    /// Creates a record stamped with the current time.
    pub fn new(link: impl Into<String>, expiry_minutes: u32) -> Self {
        Self {
            link: link.into(),
            created_at: Timestamp::now(),
            expiry: expiry_minutes,
        }
    }

    /// The instant this record stops being served, if it ever does.
    ///
    /// Returns `None` for never-expiring records (`expiry == 0`), and
    /// for expiries so large the instant falls outside the representable
    /// timestamp range; such records never expire in practice either.
    pub fn expire_at(&self) -> Option<Timestamp> {
        if self.expiry == 0 {
            return None;
        }
        self.created_at
            .checked_add(SignedDuration::from_mins(i64::from(self.expiry)))
            .ok()
    }

    /// Whether the record is past expiry at `now`.
    ///
    /// The comparison is strict: a record resolved exactly at its expiry
    /// instant is still live. A `created_at` in the future (clock skew)
    /// compares as not yet expired.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expire_at().is_some_and(|expire_at| now > expire_at)
    }

    /// Encodes the record for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(self)
            .map_err(|e| StoreError::InvalidData(format!("failed to encode record: {e}")))
    }

    /// Decodes a record previously written with [`LinkRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        serde_json::from_slice(bytes)
            .map_err(|e| StoreError::InvalidData(format!("failed to decode record: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn round_trip_is_exact() {
        let record = LinkRecord::new("https://example.com/page", 30);
        let bytes = record.to_bytes().unwrap();
        let decoded = LinkRecord::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn wire_format_keys() {
        let record = LinkRecord {
            link: "https://example.com/".to_string(),
            created_at: ts("2024-03-01T00:00:00Z"),
            expiry: 5,
        };

        let value: serde_json::Value =
            serde_json::from_slice(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(value["link"], "https://example.com/");
        assert_eq!(value["expiry"], 5);
        // created_at is an ISO-8601 timestamp string
        assert_eq!(value["created_at"], "2024-03-01T00:00:00Z");
    }

    #[test]
    fn garbage_bytes_rejected() {
        let err = LinkRecord::from_bytes(b"not json").unwrap_err();
        assert!(matches!(err, StoreError::InvalidData(_)));
    }

    #[test]
    fn zero_expiry_never_expires() {
        let record = LinkRecord {
            link: "https://example.com/".to_string(),
            created_at: ts("2024-03-01T00:00:00Z"),
            expiry: 0,
        };

        assert_eq!(record.expire_at(), None);
        // 10000 days later, still live
        assert!(!record.is_expired_at(ts("2051-07-16T00:00:00Z")));
    }

    #[test]
    fn expiry_boundary_is_strict() {
        let record = LinkRecord {
            link: "https://example.com/".to_string(),
            created_at: ts("2024-03-01T00:00:00Z"),
            expiry: 5,
        };

        assert!(!record.is_expired_at(ts("2024-03-01T00:04:59Z")));
        assert!(!record.is_expired_at(ts("2024-03-01T00:05:00Z")));
        assert!(record.is_expired_at(ts("2024-03-01T00:05:01Z")));
    }

    #[test]
    fn huge_expiry_never_expires() {
        // u32::MAX minutes lands past the representable timestamp range;
        // the record must behave as never-expiring, not panic.
        let record = LinkRecord::new("https://example.com/", u32::MAX);

        assert_eq!(record.expire_at(), None);
        assert!(!record.is_expired_at(Timestamp::now()));
    }

    #[test]
    fn future_created_at_is_not_expired() {
        let record = LinkRecord {
            link: "https://example.com/".to_string(),
            created_at: ts("2024-03-01T01:00:00Z"),
            expiry: 5,
        };

        // Observed before its own creation time: treated as live.
        assert!(!record.is_expired_at(ts("2024-03-01T00:00:00Z")));
    }
}
