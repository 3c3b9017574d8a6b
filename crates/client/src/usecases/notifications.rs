//! Notification use-cases.

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::{DataEnvelope, Notification};

/// Fetch the authenticated user's notifications.
pub async fn list_notifications(
    adapter: &impl HttpAdapter,
    unread_only: bool,
) -> Result<Vec<Notification>, ClientError> {
    let envelope: DataEnvelope<Vec<Notification>> = adapter
        .get(&format!("/api/v1/notifications?unread_only={unread_only}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener las notificaciones", e))?;
    Ok(envelope.data)
}

/// Mark one notification as read.
pub async fn mark_notification_read(
    adapter: &impl HttpAdapter,
    id: i64,
) -> Result<(), ClientError> {
    adapter
        .post::<serde_json::Value, _>(
            &format!("/api/v1/notifications/{id}/read"),
            &serde_json::json!({}),
        )
        .await
        .map(|_| ())
        .map_err(|e| ClientError::operation("No fue posible marcar la notificación como leída", e))
}

/// Mark every notification as read, returning how many were marked.
pub async fn mark_all_notifications_read(
    adapter: &impl HttpAdapter,
) -> Result<u64, ClientError> {
    #[derive(serde::Deserialize)]
    struct MarkedRead {
        marked_read: u64,
    }

    let envelope: DataEnvelope<MarkedRead> = adapter
        .post("/api/v1/notifications/read-all", &serde_json::json!({}))
        .await
        .map_err(|e| {
            ClientError::operation("No fue posible marcar las notificaciones como leídas", e)
        })?;
    Ok(envelope.data.marked_read)
}

/// Fetch the unread notification count.
pub async fn unread_notification_count(adapter: &impl HttpAdapter) -> Result<i64, ClientError> {
    #[derive(serde::Deserialize)]
    struct Count {
        count: i64,
    }

    let envelope: DataEnvelope<Count> = adapter
        .get("/api/v1/notifications/unread-count")
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener el contador de no leídas", e))?;
    Ok(envelope.data.count)
}
