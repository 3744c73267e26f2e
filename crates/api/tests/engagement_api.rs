//! HTTP-level integration tests for bookmarks, direct messages,
//! notifications, and feedback.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

use eventsphere_api::auth::password::hash_password;
use eventsphere_core::notification::{KIND_INFO, KIND_WARNING};
use eventsphere_db::models::user::CreateUser;
use eventsphere_db::repositories::{NotificationRepo, UserRepo};

/// Sign a user up via the API and return `(token, user_id)`.
async fn signup(pool: &PgPool, name: &str, email: &str, role: &str) -> (String, i64) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": "hunter2-but-longer",
        "role": role,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    (
        json["data"]["token"].as_str().unwrap().to_string(),
        json["data"]["user"]["id"].as_i64().unwrap(),
    )
}

/// Create an admin directly (signup refuses the role) and log them in.
async fn create_admin(pool: &PgPool) -> String {
    let password = "admin-password-123";
    let hashed = hash_password(password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            name: "Root".to_string(),
            email: "root@test.com".to_string(),
            password_hash: hashed,
            role: "admin".to_string(),
            phone: None,
            company_name: None,
        },
    )
    .await
    .expect("admin creation should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "root@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a published expo with one session; returns the session id.
async fn seed_session(pool: &PgPool) -> i64 {
    let (organizer, _) = signup(pool, "Org", "org@test.com", "organizer").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": "Host Expo",
        "description": "d",
        "start_date": "2026-10-01T09:00:00Z",
        "end_date": "2026-10-03T18:00:00Z",
        "venue": "v", "address": "a", "city": "c", "country": "DE",
        "status": "published",
    });
    let response = post_json_auth(app, "/api/v1/expos", &organizer, body).await;
    let expo_id = body_json(response).await["data"]["expo"]["id"]
        .as_i64()
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "expo_id": expo_id,
        "title": "Bookmarkable",
        "type": "workshop",
        "start_time": "2026-10-01T10:00:00Z",
        "end_time": "2026-10-01T12:00:00Z",
        "location": "Room 2",
        "speaker_name": "Sam",
        "max_attendees": 30,
    });
    let response = post_json_auth(app, "/api/v1/sessions", &organizer, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Bookmarks
// ---------------------------------------------------------------------------

/// A bookmark toggles on and off; the response carries the resulting set.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bookmark_toggle(pool: PgPool) {
    let session_id = seed_session(&pool).await;
    let (attendee, _) = signup(&pool, "Att", "att@test.com", "attendee").await;

    let uri = format!("/api/v1/users/bookmarks/{session_id}");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, &attendee, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Session bookmarked");
    assert_eq!(json["data"]["added"], true);
    assert_eq!(json["data"]["bookmarks"], serde_json::json!([session_id]));

    // The listing expands the bookmarked sessions.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/users/bookmarks", &attendee).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let sessions = json["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["title"], "Bookmarkable");

    // A second toggle removes it.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, &attendee, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Bookmark removed");
    assert_eq!(json["data"]["added"], false);
    assert!(json["data"]["bookmarks"].as_array().unwrap().is_empty());

    // Toggling a nonexistent session is a 404.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/users/bookmarks/999999",
        &attendee,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Threads accumulate in order; conversation summaries carry the latest
/// message per counterpart.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_messaging(pool: PgPool) {
    let (alice, alice_id) = signup(&pool, "Alice", "alice@test.com", "organizer").await;
    let (bob, bob_id) = signup(&pool, "Bob", "bob@test.com", "exhibitor").await;

    for (from, to, text) in [
        (&alice, bob_id, "Hello Bob"),
        (&bob, alice_id, "Hi Alice"),
        (&alice, bob_id, "Booth question"),
    ] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "recipient_id": to, "content": text });
        let response = post_json_auth(app, "/api/v1/messages", from, body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Thread is chronological and identical from both sides.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/messages/{alice_id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let contents: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Hello Bob", "Hi Alice", "Booth question"]);

    // One conversation each, headed by the latest message.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/messages/conversations", &bob).await;
    let json = body_json(response).await;
    let conversations = json["data"].as_array().unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0]["counterpart_name"], "Alice");
    assert_eq!(conversations[0]["last_message_content"], "Booth question");

    // Self-messages and empty content are rejected.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "recipient_id": bob_id, "content": "  " });
    let response = post_json_auth(app, "/api/v1/messages", &bob, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "recipient_id": bob_id, "content": "me again" });
    let response = post_json_auth(app, "/api/v1/messages", &bob, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// The feed is per-user with an unread filter; marking read is scoped to
/// the owner.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_notifications(pool: PgPool) {
    let (user, user_id) = signup(&pool, "User", "user@test.com", "attendee").await;
    let (other, _) = signup(&pool, "Other", "other@test.com", "attendee").await;

    let first = NotificationRepo::create(&pool, user_id, "first", KIND_INFO)
        .await
        .expect("insert should succeed");
    NotificationRepo::create(&pool, user_id, "second", KIND_WARNING)
        .await
        .expect("insert should succeed");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications", &user).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Another user sees an empty feed and can not touch these rows.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/notifications", &other).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/notifications/{}/read", first.id),
        &other,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner marks it read; the unread filter hides it.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/notifications/{}/read", first.id),
        &user,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_read"], true);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/notifications?unread_only=true", &user).await;
    let json = body_json(response).await;
    let unread = json["data"].as_array().unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0]["message"], "second");
    assert_eq!(unread[0]["kind"], KIND_WARNING);
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Feedback flows from submission through a staff response; listing all
/// feedback takes an admin or organizer.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_feedback_workflow(pool: PgPool) {
    let (user, _) = signup(&pool, "User", "user@test.com", "attendee").await;
    let (organizer, _) = signup(&pool, "Org", "org2@test.com", "organizer").await;
    let admin = create_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "type": "bug",
        "subject": "Broken floor plan",
        "message": "Booth Z-9 renders offscreen",
    });
    let response = post_json_auth(app, "/api/v1/feedback", &user, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let feedback_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["status"], "open");

    // Unknown type is a validation error.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "type": "rant", "subject": "s", "message": "m" });
    let response = post_json_auth(app, "/api/v1/feedback", &user, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Attendees can not list everything; organizers can.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/feedback", &user).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/feedback?status=open", &organizer).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/feedback?status=open&type=bug", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // A non-matching type filter returns nothing.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/feedback?type=complaint", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Admin responds; status defaults to resolved.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "response": "Fixed in the next deploy" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/feedback/{feedback_id}"),
        &admin,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "resolved");
    assert_eq!(json["data"]["response"], "Fixed in the next deploy");

    // The submitter sees the response under /feedback/my-feedback.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/feedback/my-feedback", &user).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["response"], "Fixed in the next deploy");
}
