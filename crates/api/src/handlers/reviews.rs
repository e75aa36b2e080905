//! Handlers for creating, reading, and maintaining shareable reviews.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meetplan_core::approval::{self, OverallStatus, ReviewSummary};
use meetplan_core::error::CoreError;
use meetplan_core::types::DbId;
use meetplan_db::models::approval::Approval;
use meetplan_db::models::review::{CreateReviewMeeting, Review, ReviewMeeting};
use meetplan_db::repositories::{ApprovalRepo, ReviewRepo};
use meetplan_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/reviews`.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    /// Name of the administrator sharing the review. Defaults to `admin`.
    pub created_by: Option<String>,
    pub meetings: Vec<CreateReviewMeeting>,
}

/// Response payload for a created review.
#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub review_id: Uuid,
    pub review_url: String,
    pub meeting_count: usize,
    pub expires_at: meetplan_core::types::Timestamp,
}

/// One review meeting together with its director responses and the
/// status derived from them.
#[derive(Debug, Serialize)]
pub struct MeetingWithApprovals {
    #[serde(flatten)]
    pub meeting: ReviewMeeting,
    pub approvals: Vec<Approval>,
    pub overall_status: OverallStatus,
    pub approved_count: i64,
}

/// Full review payload returned by `GET /api/v1/reviews/{id}`.
#[derive(Debug, Serialize)]
pub struct ReviewDetail {
    #[serde(flatten)]
    pub review: Review,
    pub meetings: Vec<MeetingWithApprovals>,
}

/// POST /api/v1/reviews
///
/// Snapshot a meeting set into a new shareable review.
pub async fn create_review(
    State(state): State<AppState>,
    Json(input): Json<CreateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    if input.meetings.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A review must contain at least one meeting".to_string(),
        )));
    }

    let created_by = input.created_by.as_deref().unwrap_or("admin");
    let review = ReviewRepo::create(&state.pool, created_by, &input.meetings).await?;

    tracing::info!(
        review_id = %review.id,
        created_by,
        meeting_count = input.meetings.len(),
        "Review created"
    );

    let review_url = format!(
        "{}/review/{}",
        state.config.public_base_url.trim_end_matches('/'),
        review.id
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreateReviewResponse {
                review_id: review.id,
                review_url,
                meeting_count: input.meetings.len(),
                expires_at: review.expires_at,
            },
        }),
    ))
}

/// GET /api/v1/reviews/{review_id}
///
/// Full review: meetings in date order, each with its responses and
/// derived status.
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let review = load_review(&state.pool, review_id).await?;
    let detail = assemble_review(&state.pool, review).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/reviews/{review_id}/status
///
/// Aggregate approval counts across the review's meetings.
pub async fn review_status(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> AppResult<Json<DataResponse<ReviewSummary>>> {
    let review = load_review(&state.pool, review_id).await?;
    let detail = assemble_review(&state.pool, review).await?;

    let summary = approval::summarize(detail.meetings.iter().map(|m| m.overall_status));
    Ok(Json(DataResponse { data: summary }))
}

/// Request body for `PUT /api/v1/reviews/{id}/meetings`.
#[derive(Debug, Deserialize)]
pub struct ReplaceMeetingsRequest {
    pub meetings: Vec<CreateReviewMeeting>,
}

/// PUT /api/v1/reviews/{review_id}/meetings
///
/// Replace the review's meeting set wholesale. Responses to dropped
/// meetings are removed with them.
pub async fn replace_meetings(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(input): Json<ReplaceMeetingsRequest>,
) -> AppResult<impl IntoResponse> {
    if input.meetings.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A review must contain at least one meeting".to_string(),
        )));
    }

    load_review(&state.pool, review_id).await?;
    let meeting_count = ReviewRepo::replace_meetings(&state.pool, review_id, &input.meetings).await?;

    tracing::info!(review_id = %review_id, meeting_count, "Review meeting set replaced");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "meeting_count": meeting_count }),
    }))
}

/// Request body for `PATCH /api/v1/reviews/{id}/meetings/{mid}`.
#[derive(Debug, Deserialize)]
pub struct UpdateDescriptionRequest {
    pub description: String,
}

/// PATCH /api/v1/reviews/{review_id}/meetings/{meeting_id}
///
/// Edit one meeting's description in place.
pub async fn update_description(
    State(state): State<AppState>,
    Path((review_id, meeting_id)): Path<(Uuid, DbId)>,
    Json(input): Json<UpdateDescriptionRequest>,
) -> AppResult<impl IntoResponse> {
    load_review(&state.pool, review_id).await?;

    let updated =
        ReviewRepo::update_description(&state.pool, review_id, meeting_id, &input.description)
            .await?;
    if updated == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id: meeting_id.to_string(),
        }));
    }

    let meeting = ReviewRepo::find_meeting(&state.pool, review_id, meeting_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id: meeting_id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: meeting }))
}

/// POST /api/v1/reviews/{review_id}/deduplicate
///
/// Drop duplicate meetings, keeping the earliest-inserted row of each
/// (program, meeting type) pair.
pub async fn deduplicate(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    load_review(&state.pool, review_id).await?;

    let (removed, remaining) = ReviewRepo::deduplicate(&state.pool, review_id).await?;

    tracing::info!(review_id = %review_id, removed, remaining, "Review deduplicated");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "removed": removed, "remaining": remaining }),
    }))
}

/// Load a review or fail with 404. `expires_at` is advisory metadata for
/// clients; a past date never blocks an operation.
pub(crate) async fn load_review(pool: &DbPool, review_id: Uuid) -> Result<Review, AppError> {
    ReviewRepo::find_by_id(pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id.to_string(),
        }))
}

/// Join a review's meetings with their responses and derive per-meeting
/// status. Shared by the detail, status, and approval handlers.
pub(crate) async fn assemble_review(
    pool: &DbPool,
    review: Review,
) -> Result<ReviewDetail, AppError> {
    let meetings = ReviewRepo::list_meetings(pool, review.id).await?;
    let approvals = ApprovalRepo::list_for_review(pool, review.id).await?;

    let mut by_meeting: HashMap<DbId, Vec<Approval>> = HashMap::new();
    for approval in approvals {
        by_meeting
            .entry(approval.review_meeting_id)
            .or_default()
            .push(approval);
    }

    let meetings = meetings
        .into_iter()
        .map(|meeting| {
            let approvals = by_meeting.remove(&meeting.id).unwrap_or_default();
            let (overall_status, approved_count) =
                approval::derive_status(approvals.iter().map(|a| a.status.as_str()));
            MeetingWithApprovals {
                meeting,
                approvals,
                overall_status,
                approved_count,
            }
        })
        .collect();

    Ok(ReviewDetail { review, meetings })
}
