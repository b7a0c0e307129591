use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ExperienceId, GuideId, ReservationId, ReviewId, UserId},
    review::{event::CreateReview, Review},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub reservation_id: ReservationId,
    #[garde(range(min = 0, max = 5))]
    pub experience_rating: i32,
    #[garde(range(min = 0, max = 5))]
    pub guide_rating: i32,
    #[garde(skip)]
    pub comment: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub photos: Vec<String>,
}

impl CreateReviewRequest {
    pub fn into_event(self, reviewed_by: UserId) -> CreateReview {
        let CreateReviewRequest {
            reservation_id,
            experience_rating,
            guide_rating,
            comment,
            photos,
        } = self;
        CreateReview::new(
            reservation_id,
            reviewed_by,
            experience_rating,
            guide_rating,
            comment,
            photos,
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewResponse {
    pub review_id: ReviewId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
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
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
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
            updated_at: _,
        } = value;
        Self {
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
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub items: Vec<ReviewResponse>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(value: Vec<Review>) -> Self {
        Self {
            items: value.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}
