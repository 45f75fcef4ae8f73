//! HTTP transport for the shortly URL shortener.
//!
//! Exposes the assigner and resolver over axum: `POST /shorten` creates
//! a short link, `GET /{short_code}` redirects to it. Everything the
//! core needs from the outside world (listen address, public base URL,
//! store backend) arrives through [`cli::CLI`] and is threaded through
//! [`state::AppState`].

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod pages;
pub mod state;

pub use app::App;
pub use state::AppState;
