//! Handlers for director responses to review meetings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use chrono::NaiveDate;
use meetplan_core::approval::validate_status;
use meetplan_core::error::CoreError;
use meetplan_core::types::DbId;
use meetplan_db::models::approval::UpsertApproval;
use meetplan_db::repositories::{ApprovalRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::reviews::{assemble_review, load_review};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/reviews/{id}/meetings/{mid}/approvals`.
#[derive(Debug, Deserialize)]
pub struct SubmitApprovalRequest {
    pub director_name: String,
    pub status: String,
    pub comment: Option<String>,
    pub suggested_date: Option<NaiveDate>,
    pub suggested_time: Option<String>,
}

/// POST /api/v1/reviews/{review_id}/meetings/{meeting_id}/approvals
///
/// Record a director's response. Responding twice to the same meeting
/// overwrites the earlier response rather than stacking a second one.
/// Returns the refreshed review so the caller can re-render in place.
pub async fn submit_approval(
    State(state): State<AppState>,
    Path((review_id, meeting_id)): Path<(Uuid, DbId)>,
    Json(input): Json<SubmitApprovalRequest>,
) -> AppResult<impl IntoResponse> {
    let review = load_review(&state.pool, review_id).await?;
    ensure_meeting_in_review(&state, review_id, meeting_id).await?;

    if input.director_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "director_name must not be empty".to_string(),
        )));
    }
    validate_status(&input.status)?;

    // The name is the identity key and is stored exactly as submitted;
    // "Dr. Weber" and "dr. weber" are different responders.
    let upsert = UpsertApproval {
        director_name: input.director_name,
        status: input.status,
        comment: input.comment,
        suggested_date: input.suggested_date,
        suggested_time: input.suggested_time,
    };
    let approval = ApprovalRepo::upsert(&state.pool, meeting_id, &upsert).await?;

    tracing::info!(
        review_id = %review_id,
        meeting_id,
        director = %approval.director_name,
        status = %approval.status,
        "Approval recorded"
    );

    let detail = assemble_review(&state.pool, review).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// DELETE /api/v1/reviews/{review_id}/meetings/{meeting_id}/approvals/{director_name}
///
/// Remove one director's response to one meeting.
pub async fn clear_approval(
    State(state): State<AppState>,
    Path((review_id, meeting_id, director_name)): Path<(Uuid, DbId, String)>,
) -> AppResult<impl IntoResponse> {
    load_review(&state.pool, review_id).await?;
    ensure_meeting_in_review(&state, review_id, meeting_id).await?;

    let deleted = ApprovalRepo::delete_one(&state.pool, meeting_id, &director_name).await?;

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": deleted }),
    }))
}

/// DELETE /api/v1/reviews/{review_id}/meetings/{meeting_id}/approvals
///
/// Remove every response to one meeting, resetting it to pending.
pub async fn clear_meeting_approvals(
    State(state): State<AppState>,
    Path((review_id, meeting_id)): Path<(Uuid, DbId)>,
) -> AppResult<impl IntoResponse> {
    load_review(&state.pool, review_id).await?;
    ensure_meeting_in_review(&state, review_id, meeting_id).await?;

    let deleted = ApprovalRepo::delete_for_meeting(&state.pool, meeting_id).await?;

    tracing::info!(review_id = %review_id, meeting_id, deleted, "Meeting approvals cleared");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": deleted }),
    }))
}

/// DELETE /api/v1/reviews/{review_id}/approvals/{director_name}
///
/// Remove one director's responses across the whole review.
pub async fn clear_director_approvals(
    State(state): State<AppState>,
    Path((review_id, director_name)): Path<(Uuid, String)>,
) -> AppResult<impl IntoResponse> {
    load_review(&state.pool, review_id).await?;

    let deleted = ApprovalRepo::delete_by_director(&state.pool, review_id, &director_name).await?;

    tracing::info!(
        review_id = %review_id,
        director = %director_name,
        deleted,
        "Director approvals cleared"
    );

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": deleted }),
    }))
}

/// Fail with 404 unless the meeting belongs to this review. A valid
/// meeting id from some other review must not be reachable here.
async fn ensure_meeting_in_review(
    state: &AppState,
    review_id: Uuid,
    meeting_id: DbId,
) -> Result<(), AppError> {
    ReviewRepo::find_meeting(&state.pool, review_id, meeting_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id: meeting_id.to_string(),
        }))?;
    Ok(())
}
