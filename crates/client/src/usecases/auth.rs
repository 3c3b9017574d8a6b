//! Authentication use-cases.

use clinica_core::dto::password::ChangePassword;
use serde::Serialize;

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::AuthResponse;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

/// Authenticate with username and password.
pub async fn login(
    adapter: &impl HttpAdapter,
    username: &str,
    password: &str,
) -> Result<AuthResponse, ClientError> {
    adapter
        .post("/api/v1/auth/login", &LoginBody { username, password })
        .await
        .map_err(|e| ClientError::operation("No fue posible iniciar sesión", e))
}

/// Exchange a refresh token for fresh credentials.
pub async fn refresh(
    adapter: &impl HttpAdapter,
    refresh_token: &str,
) -> Result<AuthResponse, ClientError> {
    adapter
        .post("/api/v1/auth/refresh", &RefreshBody { refresh_token })
        .await
        .map_err(|e| ClientError::operation("No fue posible renovar la sesión", e))
}

/// Revoke every session of the authenticated user.
pub async fn logout(adapter: &impl HttpAdapter) -> Result<(), ClientError> {
    adapter
        .post::<serde_json::Value, _>("/api/v1/auth/logout", &serde_json::json!({}))
        .await
        .map(|_| ())
        .map_err(|e| ClientError::operation("No fue posible cerrar la sesión", e))
}

/// Change the authenticated user's password.
pub async fn change_password(
    adapter: &impl HttpAdapter,
    change: &ChangePassword,
) -> Result<(), ClientError> {
    #[derive(Serialize)]
    struct Body<'a> {
        actual: &'a str,
        nueva: &'a str,
    }

    adapter
        .post::<serde_json::Value, _>(
            "/api/v1/auth/change-password",
            &Body {
                actual: &change.actual,
                nueva: &change.nueva,
            },
        )
        .await
        .map(|_| ())
        .map_err(|e| ClientError::operation("No fue posible cambiar la contraseña", e))
}
