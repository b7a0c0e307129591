use chrono::{DateTime, Utc};
use kernel::model::{
    id::{NotificationId, UserId},
    notification::Notification,
};

#[derive(sqlx::FromRow)]
pub struct NotificationRow {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub actor_id: Option<UserId>,
    pub kind: String,
    pub title: Option<String>,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(value: NotificationRow) -> Self {
        let NotificationRow {
            notification_id,
            user_id,
            actor_id,
            kind,
            title,
            message,
            data,
            read,
            created_at,
            updated_at,
        } = value;
        Notification {
            notification_id,
            user_id,
            actor_id,
            kind,
            title,
            message,
            data,
            read,
            created_at,
            updated_at,
        }
    }
}
