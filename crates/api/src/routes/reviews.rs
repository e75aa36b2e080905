//! Route definitions for the review sharing and approval workflow.

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::{approvals, reviews, sync};
use crate::state::AppState;

/// Review routes, nested under `/reviews`.
///
/// ```text
/// POST   /                                          create_review
/// GET    /{review_id}                               get_review
/// GET    /{review_id}/status                        review_status
/// PUT    /{review_id}/meetings                      replace_meetings
/// PATCH  /{review_id}/meetings/{meeting_id}         update_description
/// POST   /{review_id}/meetings/{meeting_id}/approvals          submit_approval
/// DELETE /{review_id}/meetings/{meeting_id}/approvals          clear_meeting_approvals
/// DELETE /{review_id}/meetings/{meeting_id}/approvals/{name}   clear_approval
/// DELETE /{review_id}/approvals/{name}              clear_director_approvals
/// POST   /{review_id}/sync                          sync_meeting
/// POST   /{review_id}/deduplicate                   deduplicate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(reviews::create_review))
        .route("/{review_id}", get(reviews::get_review))
        .route("/{review_id}/status", get(reviews::review_status))
        .route("/{review_id}/meetings", put(reviews::replace_meetings))
        .route(
            "/{review_id}/meetings/{meeting_id}",
            patch(reviews::update_description),
        )
        .route(
            "/{review_id}/meetings/{meeting_id}/approvals",
            post(approvals::submit_approval).delete(approvals::clear_meeting_approvals),
        )
        .route(
            "/{review_id}/meetings/{meeting_id}/approvals/{director_name}",
            delete(approvals::clear_approval),
        )
        .route(
            "/{review_id}/approvals/{director_name}",
            delete(approvals::clear_director_approvals),
        )
        .route("/{review_id}/sync", post(sync::sync_meeting))
        .route("/{review_id}/deduplicate", post(reviews::deduplicate))
}
