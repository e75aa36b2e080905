//! Route definitions for rule-based meeting derivation.

use axum::routing::post;
use axum::Router;

use crate::handlers::meetings;
use crate::state::AppState;

/// Meeting derivation routes, nested under `/meetings`.
///
/// ```text
/// POST   /generate       generate_meetings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(meetings::generate_meetings))
}
