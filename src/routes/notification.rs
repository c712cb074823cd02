use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;

use crate::{
    dto::notification_dto::{MessageResponse, NotificationResponse},
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Caller's notifications, newest first", body = Json<Vec<NotificationResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn get_my_notifications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let notifications = state.notification_service.list_for(&auth.subject).await?;
    let items: Vec<NotificationResponse> = notifications.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    params(
        ("notification_id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Marked read (no-op when not the caller's)", body = Json<MessageResponse>)
    )
)]
#[axum::debug_handler]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state
        .notification_service
        .mark_read(&auth.subject, notification_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Notification marked as read".to_string(),
    }))
}
