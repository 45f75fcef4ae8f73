//! Short code resolution for the shortly URL shortener.
//!
//! This crate provides a [`ResolverService`] that maps a short code back
//! to its target URL, enforcing expiry at read time. Expired records are
//! deleted the first time a resolve observes them past their expiry;
//! there is no background sweep.

pub mod error;
pub mod service;

pub use error::ResolveError;
pub use service::{Resolution, ResolverService};
