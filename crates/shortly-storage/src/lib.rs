//! Record store implementations for the shortly URL shortener.
//!
//! Two backends implement [`shortly_core::RecordStore`]: an in-memory
//! store used by tests and single-process deployments, and a Redis store
//! for anything that has to survive a restart.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use redis::RedisStore;
