//! Code assignment for the shortly URL shortener.
//!
//! This crate maps a long URL to its deterministic short code and writes
//! the backing record on first sight. Core types are re-exported from
//! `shortly_core`.

pub mod error;
pub mod service;

pub use error::ShortenError;
pub use service::{Assignment, ShortenerService};
