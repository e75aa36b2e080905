//! Route definitions for the administrator's catalog snapshot.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, nested under `/catalog`.
///
/// ```text
/// GET    /       load_snapshot
/// POST   /       save_snapshot
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(catalog::load_snapshot).post(catalog::save_snapshot))
}
