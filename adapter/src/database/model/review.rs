use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ExperienceId, GuideId, ReservationId, ReviewId, UserId},
    review::Review,
};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub experience_id: ExperienceId,
    pub guide_id: GuideId,
    pub experience_rating: i32,
    pub guide_rating: i32,
    pub comment: Option<String>,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            reservation_id,
            user_id,
            experience_id,
            guide_id,
            experience_rating,
            guide_rating,
            comment,
            photos,
            created_at,
            updated_at,
        } = value;
        Review {
            review_id,
            reservation_id,
            user_id,
            experience_id,
            guide_id,
            experience_rating,
            guide_rating,
            comment,
            photos,
            created_at,
            updated_at,
        }
    }
}
