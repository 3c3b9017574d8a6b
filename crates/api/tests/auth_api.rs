//! HTTP-level integration tests for auth endpoints.
//!
//! Tests cover login, token refresh, logout, change-password, and
//! account lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Auth flow tests
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "loginuser", "doctor").await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.cl");
    assert_eq!(json["user"]["role"], "doctor");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_test_user(&pool, "wrongpw", "doctor").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Five failed attempts lock the account; the locked account returns 403
/// even with the correct password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "lockme", "doctor").await;

    for _ in 0..5 {
        let body = serde_json::json!({ "username": "lockme", "password": "bad" });
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/auth/login",
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let body = serde_json::json!({ "username": "lockme", "password": password });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token returns new tokens; the old token is rotated out.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "refresher", "doctor").await;

    let login_json = login_user(common::build_test_app(pool.clone()), "refresher", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"], login_json["refresh_token"]);

    // The consumed refresh token is no longer valid.
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes every session: the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "leaver", "doctor").await;

    let login_json = login_user(common::build_test_app(pool.clone()), "leaver", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Change password
// ---------------------------------------------------------------------------

/// Changing the password requires the current one, enforces the minimum
/// length, and the new password works on the next login.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_flow(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "cambiante", "doctor").await;
    let token = common::token_for(&user);

    // Wrong current password -> 401.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/change-password",
        &token,
        serde_json::json!({ "actual": "equivocada", "nueva": "nueva-clave-larga" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Too-short new password -> 400 with the Spanish message.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/change-password",
        &token,
        serde_json::json!({ "actual": password, "nueva": "corta" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"][0],
        "La nueva contraseña debe tener al menos 8 caracteres"
    );

    // Valid change -> 204, then the new password logs in.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/change-password",
        &token,
        serde_json::json!({ "actual": password, "nueva": "nueva-clave-larga" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    login_user(common::build_test_app(pool), "cambiante", "nueva-clave-larga").await;
}

// ---------------------------------------------------------------------------
// Extractor behaviour
// ---------------------------------------------------------------------------

/// Requests without a token are rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/patients").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/patients", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
