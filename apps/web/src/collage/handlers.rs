//! Axum route handlers for collage submission and embedding.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Redirect},
    Json,
};
use tracing::info;

use crate::collage::embed::Embed;
use crate::collage::request::CollageRequest;
use crate::errors::AppError;
use crate::prefs;
use crate::state::AppState;

/// GET /submit
///
/// Validates the submitted form, remembers the username and sends the browser
/// on to the collage endpoint.
pub async fn handle_submit(
    State(state): State<AppState>,
    Query(fields): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let request = CollageRequest::from_fields(fields, &state.limits)?;
    let url = request.url(&state.config.collage_endpoint);
    info!(
        username = %request.username(),
        mode = %request.mode(),
        "Redirecting to collage endpoint"
    );

    let cookie = prefs::username_cookie(request.username());
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to(&url)))
}

/// GET /embed
///
/// Returns the collage URL and an `<img>` snippet for the submitted form.
pub async fn handle_embed(
    State(state): State<AppState>,
    Query(fields): Query<Vec<(String, String)>>,
) -> Result<Json<Embed>, AppError> {
    let request = CollageRequest::from_fields(fields, &state.limits)?;
    let embed = Embed::for_request(
        &request,
        &state.config.collage_endpoint,
        state.config.public_url.as_deref(),
    );
    Ok(Json(embed))
}
