//! Axum route handlers for the form edit API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::state::{EditOutcome, FormEdit, FormState};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FormEditRequest {
    #[serde(default)]
    pub state: FormState,
    pub edit: FormEdit,
}

/// Limits the page should mirror on its inputs after the edit.
#[derive(Debug, Serialize)]
pub struct InputLimits {
    pub grid_max: u32,
    pub resolution_max: u32,
}

#[derive(Debug, Serialize)]
pub struct FormEditResponse {
    #[serde(flatten)]
    pub outcome: EditOutcome,
    pub limits: InputLimits,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/form/edit
///
/// Applies one field edit to the submitted form state and returns the
/// resolved state. Never fails on bad values: they are clamped or ignored.
pub async fn handle_edit(
    State(state): State<AppState>,
    Json(request): Json<FormEditRequest>,
) -> Json<FormEditResponse> {
    let outcome = request.state.apply(request.edit, &state.limits);
    debug!(
        recomputed = ?outcome.recomputed,
        ignored = outcome.ignored,
        "form edit applied"
    );

    let limits = InputLimits {
        grid_max: state.limits.grid(outcome.state.mode).max,
        resolution_max: state.limits.resolution().max,
    };
    Json(FormEditResponse { outcome, limits })
}
