pub mod health;
pub mod link;

pub use health::health_handler;
pub use link::{resolve_handler, shorten_handler};
