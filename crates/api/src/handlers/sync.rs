//! Handler for syncing admin-side meeting edits into a shared review.
//!
//! Shared reviews hold snapshots, so an edit in the administrator's
//! working set does not show up for directors until it is pushed here.
//! Meetings are matched by (program_name, meeting_type) because row ids
//! on the two sides drift apart; a source-id fallback exists for callers
//! that can't supply characteristics.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use meetplan_core::error::CoreError;
use meetplan_core::types::DbId;
use meetplan_db::models::review::MeetingFieldPatch;
use meetplan_db::repositories::{ApprovalRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::reviews::load_review;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/reviews/{id}/sync`.
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub program_name: Option<String>,
    pub meeting_type: Option<String>,
    /// Admin-side meeting id, used only when characteristics are absent.
    pub meeting_id: Option<DbId>,
    /// When true, only report whether the meeting exists in the review
    /// and how many responses it has. Nothing is written.
    #[serde(default)]
    pub check_only: bool,
    pub updates: Option<MeetingFieldPatch>,
}

/// POST /api/v1/reviews/{review_id}/sync
///
/// Push an admin-side meeting edit into the review snapshot, or (with
/// `check_only`) probe whether syncing would land and what it would
/// overwrite. Existing approvals are left untouched either way.
pub async fn sync_meeting(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(input): Json<SyncRequest>,
) -> AppResult<impl IntoResponse> {
    load_review(&state.pool, review_id).await?;

    let characteristics = match (&input.program_name, &input.meeting_type) {
        (Some(program_name), Some(meeting_type)) => Some((program_name, meeting_type)),
        _ => None,
    };

    if input.check_only {
        let found = match (characteristics, input.meeting_id) {
            (Some((program_name, meeting_type)), _) => {
                ReviewRepo::find_by_characteristics(
                    &state.pool,
                    review_id,
                    program_name,
                    meeting_type,
                )
                .await?
            }
            (None, Some(meeting_id)) => {
                ReviewRepo::find_by_source_id(&state.pool, review_id, meeting_id).await?
            }
            (None, None) => {
                return Err(AppError::Core(CoreError::Validation(
                    "Provide program_name and meeting_type, or meeting_id".to_string(),
                )));
            }
        };
        let approval_count = match &found {
            Some(meeting) => ApprovalRepo::count_for_meeting(&state.pool, meeting.id).await?,
            None => 0,
        };

        return Ok(Json(DataResponse {
            data: serde_json::json!({
                "found": found.is_some(),
                "approval_count": approval_count,
            }),
        }));
    }

    let patch = input.updates.unwrap_or_default();
    if patch.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "updates must contain at least one field".to_string(),
        )));
    }

    let changed = match (characteristics, input.meeting_id) {
        (Some((program_name, meeting_type)), _) => {
            ReviewRepo::update_by_characteristics(
                &state.pool,
                review_id,
                program_name,
                meeting_type,
                &patch,
            )
            .await?
        }
        (None, Some(meeting_id)) => {
            ReviewRepo::update_by_source_id(&state.pool, review_id, meeting_id, &patch).await?
        }
        (None, None) => {
            return Err(AppError::Core(CoreError::Validation(
                "Provide program_name and meeting_type, or meeting_id".to_string(),
            )));
        }
    };

    tracing::info!(review_id = %review_id, changed, "Review sync applied");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "changed": changed }),
    }))
}
