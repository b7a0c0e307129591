use crate::model::id::{ReservationId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateReview {
    pub reservation_id: ReservationId,
    pub reviewed_by: UserId,
    pub experience_rating: i32,
    pub guide_rating: i32,
    pub comment: Option<String>,
    pub photos: Vec<String>,
}
