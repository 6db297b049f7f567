use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use pinhole_core::ShortCode;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = payload?;

    let code = state.shortener().shorten(&request.url).await?;
    info!(code = %code, "shortened url");

    Ok(Json(ShortenResponse {
        short_url: code.to_string(),
        original_url: request.url,
    }))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // A path segment that cannot be a generated code cannot be in the
    // store either, so it maps to 404 like any unknown code.
    let code = ShortCode::new(short_code).map_err(|e| ApiError::NotFound(e.to_string()))?;

    let record = state.shortener().resolve(&code).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}
