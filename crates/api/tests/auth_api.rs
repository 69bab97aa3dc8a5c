//! HTTP-level tests for registration, login and the current-user endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get, get_auth, post_json, token_for, TEST_PASSWORD};
use ideabox_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_then_login(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/users",
        json!({ "email": "hana@example.jp", "username": "hana", "password": "long-enough" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "hana");
    assert!(json["data"].get("password_hash").is_none());

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "hana", "password": "long-enough" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["email"], "hana@example.jp");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_is_conflict(pool: PgPool) {
    create_user(&pool, "taken").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/users",
        json!({ "email": "other@example.jp", "username": "taken", "password": "long-enough" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("uq_users_username"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_password_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/users",
        json!({ "email": "x@example.jp", "username": "x", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/v1/users",
        json!({ "email": "not-an-email", "username": "x", "password": "long-enough" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("valid email"));
    assert!(UserRepo::find_by_username(&pool, "x").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_or_unknown_user_is_401(pool: PgPool) {
    create_user(&pool, "real").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "real", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "ghost", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_user_cannot_log_in(pool: PgPool) {
    let user = create_user(&pool, "sleeper").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "sleeper", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_a_valid_token(pool: PgPool) {
    let user = create_user(&pool, "me").await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/users/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app.clone(), "/api/v1/users/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/users/me", &token_for(user.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], user.id);
}
