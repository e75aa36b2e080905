//! Handlers for saving and loading the administrator's catalog snapshot.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use meetplan_core::meeting::MeetingInstance;
use meetplan_core::program::Program;
use meetplan_db::models::catalog::{ProgramMeetingRow, ProgramRow};
use meetplan_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/catalog`.
#[derive(Debug, Deserialize)]
pub struct SaveSnapshotRequest {
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub meetings: Vec<MeetingInstance>,
}

/// Stored snapshot returned by `GET /api/v1/catalog`.
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub programs: Vec<ProgramRow>,
    pub meetings: Vec<ProgramMeetingRow>,
}

/// POST /api/v1/catalog
///
/// Replace the stored snapshot with the administrator's current programs
/// and working meeting set.
pub async fn save_snapshot(
    State(state): State<AppState>,
    Json(input): Json<SaveSnapshotRequest>,
) -> AppResult<impl IntoResponse> {
    CatalogRepo::replace_snapshot(&state.pool, &input.programs, &input.meetings).await?;

    tracing::info!(
        programs = input.programs.len(),
        meetings = input.meetings.len(),
        "Catalog snapshot saved"
    );

    Ok(Json(DataResponse {
        data: serde_json::json!({
            "programs": input.programs.len(),
            "meetings": input.meetings.len(),
        }),
    }))
}

/// GET /api/v1/catalog
///
/// Load the stored snapshot so a new admin session can pick up where
/// the previous one left off.
pub async fn load_snapshot(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SnapshotResponse>>> {
    let (programs, meetings) = CatalogRepo::load(&state.pool).await?;
    Ok(Json(DataResponse {
        data: SnapshotResponse { programs, meetings },
    }))
}
