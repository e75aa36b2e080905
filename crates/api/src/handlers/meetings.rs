//! Handler for rule-based meeting derivation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use meetplan_core::builder;
use meetplan_core::program::Program;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/meetings/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub programs: Vec<Program>,
    /// Cutoff for the past-meeting filter. Defaults to the current date.
    pub today: Option<NaiveDate>,
}

/// POST /api/v1/meetings/generate
///
/// Apply the rule table to the given programs and return the derived
/// meeting set, filtered and sorted. Pure computation; nothing is stored.
pub async fn generate_meetings(
    State(_state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let today = input.today.unwrap_or_else(|| Utc::now().date_naive());
    let meetings = builder::build(&input.programs, today);

    tracing::info!(
        program_count = input.programs.len(),
        meeting_count = meetings.len(),
        "Meeting set derived"
    );

    Ok(Json(DataResponse { data: meetings }))
}
