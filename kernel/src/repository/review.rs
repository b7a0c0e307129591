use crate::model::{
    id::{ExperienceId, ReviewId},
    review::{event::CreateReview, Review},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Creates the review and refreshes the experience's and guide's average
    /// ratings in the same transaction.
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId>;
    async fn find_by_experience_id(&self, experience_id: ExperienceId) -> AppResult<Vec<Review>>;
}
