use crate::error::Result;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::pages;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use shortly_core::{RecordStore, ShortCode};
use shortly_resolver::Resolution;

pub async fn shorten_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let assignment = state.shortener.assign(&request.link, request.expiry).await?;

    let shortened_link = assignment.code.to_url(&state.public_base_url);
    Ok(Json(ShortenResponse {
        original_link: assignment.target_url,
        shortened_link,
    }))
}

pub async fn resolve_handler<S: RecordStore>(
    Path(short_code): Path<String>,
    State(state): State<AppState<S>>,
) -> Result<Response> {
    // A path that can't even be a short code resolves like an unknown one.
    let Ok(code) = ShortCode::new(short_code) else {
        return Ok(pages::not_found());
    };

    match state.resolver.resolve(&code).await? {
        Resolution::Redirect(url) => Ok(Redirect::temporary(&url).into_response()),
        Resolution::NotFound => Ok(pages::not_found()),
        Resolution::Expired => Ok(pages::expired()),
    }
}
