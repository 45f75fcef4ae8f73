use axum::routing::{get, post};
use axum::Router;
use shortly_core::RecordStore;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, resolve_handler, shorten_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router<S: RecordStore>(state: AppState<S>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_handler::<S>))
            .route("/{short_code}", get(resolve_handler::<S>))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
