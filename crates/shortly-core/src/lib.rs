//! Core types and traits for the shortly URL shortener.
//!
//! This crate provides the shared vocabulary used by the code assigner
//! and the resolver: short codes, link records, and the record store
//! abstraction both services are built against.

pub mod error;
pub mod record;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, Result, StoreError};
pub use record::LinkRecord;
pub use shortcode::ShortCode;
pub use store::RecordStore;
