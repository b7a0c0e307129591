use crate::model::id::{ExperienceId, GuideId, ReservationId, ReviewId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

/// Post-completion feedback. Immutable once posted; at most one per
/// reservation.
#[derive(Debug, Clone)]
pub struct Review {
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
