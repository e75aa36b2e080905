pub mod catalog;
pub mod health;
pub mod meetings;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reviews                                          create review (POST)
/// /reviews/{id}                                     review detail (GET)
/// /reviews/{id}/status                              approval summary (GET)
/// /reviews/{id}/meetings                            replace meeting set (PUT)
/// /reviews/{id}/meetings/{mid}                      edit description (PATCH)
/// /reviews/{id}/meetings/{mid}/approvals            submit response (POST),
///                                                   clear all responses (DELETE)
/// /reviews/{id}/meetings/{mid}/approvals/{director} clear one response (DELETE)
/// /reviews/{id}/approvals/{director}                clear director across review (DELETE)
/// /reviews/{id}/sync                                sync admin edit into review (POST)
/// /reviews/{id}/deduplicate                         drop duplicate meetings (POST)
///
/// /meetings/generate                                derive meeting set (POST)
///
/// /catalog                                          save snapshot (POST), load (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/reviews", reviews::router())
        .nest("/meetings", meetings::router())
        .nest("/catalog", catalog::router())
}
