//! HTTP-level integration tests for the exhibitor application workflow:
//! submission, approval with booth assignment, rejection, and the public
//! approved directory.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Sign a user up via the API and return their token.
async fn signup(pool: &PgPool, name: &str, email: &str, role: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": "hunter2-but-longer",
        "role": role,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a published expo with two booths; returns `(expo_id, booth_ids)`.
async fn create_expo(pool: &PgPool, token: &str) -> (i64, Vec<i64>) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": "Trade Fair",
        "description": "d",
        "start_date": "2026-10-01T09:00:00Z",
        "end_date": "2026-10-03T18:00:00Z",
        "venue": "v", "address": "a", "city": "c", "country": "DE",
        "status": "published",
        "booths": [
            { "booth_number": "A-1" },
            { "booth_number": "A-2" },
        ],
    });
    let response = post_json_auth(app, "/api/v1/expos", token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let expo_id = json["data"]["expo"]["id"].as_i64().unwrap();
    let booth_ids = json["data"]["booths"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    (expo_id, booth_ids)
}

/// Submit an application and return its id.
async fn apply(pool: &PgPool, token: &str, expo_id: i64, company: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "expo_id": expo_id,
        "company_name": company,
        "products": ["widgets"],
        "services": ["installation"],
    });
    let response = post_json_auth(app, "/api/v1/exhibitors/applications", token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Submitting twice for the same expo is a conflict with the canonical
/// message; the company name falls back to the exhibitor's profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply(pool: PgPool) {
    let organizer = signup(&pool, "Org", "org@test.com", "organizer").await;
    let (expo_id, _) = create_expo(&pool, &organizer).await;

    // Exhibitor with a profile company name and no explicit one.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Exi",
        "email": "exi@test.com",
        "password": "hunter2-but-longer",
        "role": "exhibitor",
        "company_name": "Profile Co",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    let exhibitor = body_json(response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "expo_id": expo_id });
    let response = post_json_auth(app, "/api/v1/exhibitors/applications", &exhibitor, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["company_name"], "Profile Co");
    assert_eq!(json["data"]["status"], "pending");

    // Second application, even with a different company name, conflicts.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "expo_id": expo_id, "company_name": "Other Co" });
    let response = post_json_auth(app, "/api/v1/exhibitors/applications", &exhibitor, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You have already applied for this expo");

    // No company name anywhere is a validation error.
    let bare = signup(&pool, "Bare", "bare@test.com", "exhibitor").await;
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "expo_id": expo_id });
    let response = post_json_auth(app, "/api/v1/exhibitors/applications", &bare, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Company name is required");

    // Attendees can not apply at all.
    let attendee = signup(&pool, "Att", "att@test.com", "attendee").await;
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "expo_id": expo_id, "company_name": "Nope" });
    let response = post_json_auth(app, "/api/v1/exhibitors/applications", &attendee, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Approval assigns the booth atomically and stamps the application;
/// repeat approval and unavailable booths are conflicts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_with_booth(pool: PgPool) {
    let organizer = signup(&pool, "Org", "org@test.com", "organizer").await;
    let (expo_id, booth_ids) = create_expo(&pool, &organizer).await;
    let exhibitor = signup(&pool, "Exi", "exi@test.com", "exhibitor").await;
    let other = signup(&pool, "Exi2", "exi2@test.com", "exhibitor").await;

    let application_id = apply(&pool, &exhibitor, expo_id, "Acme Corp").await;
    let other_application_id = apply(&pool, &other, expo_id, "Rival Ltd").await;

    // Approve with the first booth.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "booth_id": booth_ids[0] });
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/approve"),
        &organizer,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["booth_id"].as_i64().unwrap(), booth_ids[0]);
    assert_eq!(json["data"]["booth_number"], "A-1");

    // Approving the same application again is a conflict.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/approve"),
        &organizer,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Application already approved");

    // The claimed booth can not be handed to the second applicant; their
    // application stays pending.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "booth_id": booth_ids[0] });
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{other_application_id}/approve"),
        &organizer,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Booth is not available");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{other_application_id}"),
        &organizer,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");

    // The filtered listing picks out only the still-pending application.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/exhibitors/applications?expo_id={expo_id}&status=pending"),
        &organizer,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let pending = json["data"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["company_name"], "Rival Ltd");

    // The booth shows as reserved on the public floor plan.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/expos/{expo_id}/booths")).await;
    let json = body_json(response).await;
    let reserved: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["status"] == "reserved")
        .map(|b| b["booth_number"].as_str().unwrap())
        .collect();
    assert_eq!(reserved, vec!["A-1"]);
}

/// Rejection records a reason (defaulted when absent); a rejected
/// application can still be approved later, but not re-rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reject_then_approve(pool: PgPool) {
    let organizer = signup(&pool, "Org", "org@test.com", "organizer").await;
    let (expo_id, _) = create_expo(&pool, &organizer).await;
    let exhibitor = signup(&pool, "Exi", "exi@test.com", "exhibitor").await;
    let application_id = apply(&pool, &exhibitor, expo_id, "Acme Corp").await;

    // Reject without a reason: the default is recorded.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/reject"),
        &organizer,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rejected");
    assert_eq!(
        json["data"]["rejection_reason"],
        "Application rejected by organizer"
    );

    // Re-rejecting is a conflict.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/reject"),
        &organizer,
        serde_json::json!({ "reason": "still no" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Application already rejected");

    // A rejected application can be approved on reconsideration.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/approve"),
        &organizer,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert!(json["data"]["booth_id"].is_null());

    // The exhibitor sees the final state under /applications/my.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/exhibitors/my-applications", &exhibitor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let apps = json["data"].as_array().unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0]["status"], "approved");
    assert_eq!(apps[0]["expo_title"], "Trade Fair");

    // The exhibitor can also follow the single application by id.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}"),
        &exhibitor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["company_name"], "Acme Corp");
    assert_eq!(json["data"]["status"], "approved");
}

/// Only the expo's organizer (or an admin) may review its applications.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_ownership(pool: PgPool) {
    let organizer = signup(&pool, "Org", "org@test.com", "organizer").await;
    let interloper = signup(&pool, "Intr", "intr@test.com", "organizer").await;
    let (expo_id, _) = create_expo(&pool, &organizer).await;
    let exhibitor = signup(&pool, "Exi", "exi@test.com", "exhibitor").await;
    let application_id = apply(&pool, &exhibitor, expo_id, "Acme Corp").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/approve"),
        &interloper,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{application_id}/reject"),
        &interloper,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// The approved directory is public and only lists approved applications.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approved_directory(pool: PgPool) {
    let organizer = signup(&pool, "Org", "org@test.com", "organizer").await;
    let (expo_id, booth_ids) = create_expo(&pool, &organizer).await;
    let approved = signup(&pool, "App", "app@test.com", "exhibitor").await;
    let pending = signup(&pool, "Pen", "pen@test.com", "exhibitor").await;

    let approved_id = apply(&pool, &approved, expo_id, "Shown Co").await;
    apply(&pool, &pending, expo_id, "Hidden Co").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/exhibitors/applications/{approved_id}/approve"),
        &organizer,
        serde_json::json!({ "booth_id": booth_ids[1] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/exhibitors/approved?expo_id={expo_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listed = json["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["company_name"], "Shown Co");
    assert_eq!(listed[0]["booth_number"], "A-2");
    // Review bookkeeping stays private.
    assert!(listed[0].get("rejection_reason").is_none());
}
