//! Health endpoint integration test.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// /health reports ok with a reachable database, outside /api/v1.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_check(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
