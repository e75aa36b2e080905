//! HTTP-level integration tests for syncing admin-side meeting edits
//! into shared reviews.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn meeting(
    source_id: i64,
    program: &str,
    meeting_type: &str,
    date: &str,
) -> serde_json::Value {
    serde_json::json!({
        "source_meeting_id": source_id,
        "meeting_type": meeting_type,
        "program_name": program,
        "program_type": "Workshop",
        "date": date,
        "time": "10:00",
        "duration_minutes": 60,
        "participants": ["Anna"],
        "description": "Initial agenda"
    })
}

async fn seed_review(pool: PgPool, meetings: Vec<serde_json::Value>) -> String {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reviews",
        serde_json::json!({ "created_by": "admin", "meetings": meetings }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["review_id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn sync(
    pool: PgPool,
    review_id: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let app = build_test_app(pool);
    let response = post_json(app, &format!("/api/v1/reviews/{review_id}/sync"), body).await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Test: sync by characteristics updates the snapshot
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_updates_matched_meeting(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![
            meeting(1, "Rust Workshop", "Check-in meeting", "2026-09-04"),
            meeting(2, "Rust Workshop", "Evaluation meeting", "2026-11-06"),
        ],
    )
    .await;

    let (status, json) = sync(
        pool.clone(),
        &review_id,
        serde_json::json!({
            "program_name": "Rust Workshop",
            "meeting_type": "Check-in meeting",
            "updates": { "date": "2026-09-11", "time": "14:30" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["changed"], 1);

    let app = build_test_app(pool);
    let detail = body_json(get(app, &format!("/api/v1/reviews/{review_id}")).await).await;
    let checkin = detail["data"]["meetings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["meeting_type"] == "Check-in meeting")
        .unwrap();

    assert_eq!(checkin["date"], "2026-09-11");
    assert_eq!(checkin["time"], "14:30");
    // Unpatched fields keep their stored values.
    assert_eq!(checkin["duration_minutes"], 60);
    assert_eq!(checkin["description"], "Initial agenda");
}

// ---------------------------------------------------------------------------
// Test: syncing preserves existing approvals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_preserves_approvals(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![meeting(1, "Rust Workshop", "Check-in meeting", "2026-09-04")],
    )
    .await;

    let app = build_test_app(pool.clone());
    let detail = body_json(get(app, &format!("/api/v1/reviews/{review_id}")).await).await;
    let meeting_id = detail["data"]["meetings"][0]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/reviews/{review_id}/meetings/{meeting_id}/approvals"),
        serde_json::json!({ "director_name": "Dr. Weber", "status": "approved" }),
    )
    .await;

    sync(
        pool.clone(),
        &review_id,
        serde_json::json!({
            "program_name": "Rust Workshop",
            "meeting_type": "Check-in meeting",
            "updates": { "date": "2026-09-18" }
        }),
    )
    .await;

    // Unlike a wholesale replace, a sync edits the row in place and the
    // recorded response survives.
    let app = build_test_app(pool);
    let detail = body_json(get(app, &format!("/api/v1/reviews/{review_id}")).await).await;
    let m = &detail["data"]["meetings"][0];
    assert_eq!(m["date"], "2026-09-18");
    assert_eq!(m["approvals"].as_array().unwrap().len(), 1);
    assert_eq!(m["overall_status"], "approved");
}

// ---------------------------------------------------------------------------
// Test: characteristic matching falls back to case/whitespace-insensitive
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_matches_despite_case_and_whitespace(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![meeting(1, "Rust Workshop", "Check-in meeting", "2026-09-04")],
    )
    .await;

    let (status, json) = sync(
        pool,
        &review_id,
        serde_json::json!({
            "program_name": "  rust workshop ",
            "meeting_type": "CHECK-IN MEETING",
            "updates": { "time": "15:00" }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["changed"], 1);
}

// ---------------------------------------------------------------------------
// Test: source-id fallback when characteristics are absent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_falls_back_to_meeting_id(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![meeting(42, "Rust Workshop", "Check-in meeting", "2026-09-04")],
    )
    .await;

    let (status, json) = sync(
        pool,
        &review_id,
        serde_json::json!({
            "meeting_id": 42,
            "updates": { "duration_minutes": 90 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["changed"], 1);
}

// ---------------------------------------------------------------------------
// Test: check_only reports presence and response count without writing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_check_only(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![meeting(1, "Rust Workshop", "Check-in meeting", "2026-09-04")],
    )
    .await;

    let app = build_test_app(pool.clone());
    let detail = body_json(get(app, &format!("/api/v1/reviews/{review_id}")).await).await;
    let meeting_id = detail["data"]["meetings"][0]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/reviews/{review_id}/meetings/{meeting_id}/approvals"),
        serde_json::json!({ "director_name": "Dr. Weber", "status": "approved" }),
    )
    .await;

    let (status, json) = sync(
        pool.clone(),
        &review_id,
        serde_json::json!({
            "program_name": "Rust Workshop",
            "meeting_type": "Check-in meeting",
            "check_only": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["found"], true);
    assert_eq!(json["data"]["approval_count"], 1);

    let (status, json) = sync(
        pool,
        &review_id,
        serde_json::json!({
            "program_name": "Rust Workshop",
            "meeting_type": "No such meeting",
            "check_only": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["found"], false);
    assert_eq!(json["data"]["approval_count"], 0);
}

// ---------------------------------------------------------------------------
// Test: check_only also accepts a bare meeting_id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_check_only_by_meeting_id(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![meeting(42, "Rust Workshop", "Check-in meeting", "2026-09-04")],
    )
    .await;

    let (status, json) = sync(
        pool.clone(),
        &review_id,
        serde_json::json!({ "meeting_id": 42, "check_only": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["found"], true);
    assert_eq!(json["data"]["approval_count"], 0);

    let (status, json) = sync(
        pool,
        &review_id,
        serde_json::json!({ "meeting_id": 999, "check_only": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["found"], false);
}

// ---------------------------------------------------------------------------
// Test: invalid sync payloads are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sync_validation(pool: PgPool) {
    let review_id = seed_review(
        pool.clone(),
        vec![meeting(1, "Rust Workshop", "Check-in meeting", "2026-09-04")],
    )
    .await;

    // No way to locate the meeting.
    let (status, json) = sync(
        pool.clone(),
        &review_id,
        serde_json::json!({ "updates": { "time": "15:00" } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing to write.
    let (status, json) = sync(
        pool,
        &review_id,
        serde_json::json!({
            "program_name": "Rust Workshop",
            "meeting_type": "Check-in meeting",
            "updates": {}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
