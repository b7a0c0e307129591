use crate::{
    extractor::AuthorizedUser,
    model::notification::{MarkAllReadResponse, NotificationResponse, NotificationsResponse},
};
use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use kernel::model::{
    id::{NotificationId, UserId},
    notification::event::CreateNotification,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

/// Persists a notification and pushes it to the recipient's room. Both steps
/// are best-effort; the caller's primary operation already succeeded.
pub(crate) async fn notify(registry: &AppRegistry, event: CreateNotification) {
    let recipient = event.user_id;
    match registry.notification_repository().create(event).await {
        Ok(notification) => registry.channel().publish(recipient, notification),
        Err(e) => {
            tracing::warn!(error = %e, user_id = %recipient, "failed to persist notification");
        }
    }
}

pub async fn show_notifications(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationsResponse>> {
    ensure_self(&user, user_id)?;
    registry
        .notification_repository()
        .find_by_user_id(user_id)
        .await
        .map(NotificationsResponse::from)
        .map(Json)
}

pub async fn stream_notifications(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    ensure_self(&user, user_id)?;

    let rx = registry.channel().subscribe(user_id);
    let stream = BroadcastStream::new(rx)
        .filter_map(|item| item.ok())
        .map(|notification| Event::default().json_data(NotificationResponse::from(notification)));

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

pub async fn mark_as_read(
    user: AuthorizedUser,
    Path(notification_id): Path<NotificationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationResponse>> {
    registry
        .notification_repository()
        .mark_as_read(notification_id, user.id())
        .await
        .map(NotificationResponse::from)
        .map(Json)
}

pub async fn mark_all_as_read(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MarkAllReadResponse>> {
    ensure_self(&user, user_id)?;
    let modified = registry
        .notification_repository()
        .mark_all_as_read(user_id)
        .await?;
    Ok(Json(MarkAllReadResponse { modified }))
}

fn ensure_self(user: &AuthorizedUser, user_id: UserId) -> AppResult<()> {
    if user.id() != user_id {
        return Err(AppError::ForbiddenOperation(
            "cannot access another user's notifications".into(),
        ));
    }
    Ok(())
}
