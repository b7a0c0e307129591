use crate::model::{
    id::{NotificationId, UserId},
    notification::{event::CreateNotification, Notification},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, event: CreateNotification) -> AppResult<Notification>;
    /// Most recent first, capped at 50.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Notification>>;
    async fn mark_as_read(
        &self,
        notification_id: NotificationId,
        user_id: UserId,
    ) -> AppResult<Notification>;
    /// Returns the number of notifications flipped to read.
    async fn mark_all_as_read(&self, user_id: UserId) -> AppResult<u64>;
}
