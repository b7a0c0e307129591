use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct CreateNotification {
    pub user_id: UserId,
    pub actor_id: Option<UserId>,
    pub kind: String,
    pub title: Option<String>,
    pub message: String,
    pub data: Option<serde_json::Value>,
}
