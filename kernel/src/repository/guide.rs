use crate::model::{
    guide::{event::CreateGuide, Guide},
    id::{GuideId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait GuideRepository: Send + Sync {
    /// One profile per user; a second create for the same user conflicts.
    async fn create(&self, event: CreateGuide) -> AppResult<GuideId>;
    async fn find_by_id(&self, guide_id: GuideId) -> AppResult<Option<Guide>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Guide>>;
    async fn find_all(&self) -> AppResult<Vec<Guide>>;
}
