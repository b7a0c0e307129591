use crate::model::{
    id::{ExperienceId, ReservationId, UserId},
    reservation::ReservationStatus,
};
use derive_new::new;

#[derive(new)]
pub struct CreateReservation {
    pub experience_id: ExperienceId,
    pub reserved_by: UserId,
    pub seats: i32,
    /// Client-computed total, verified against seats * price_per_person.
    pub total: i64,
}

#[derive(new)]
pub struct CancelReservation {
    pub reservation_id: ReservationId,
    pub requested_user: UserId,
}

#[derive(new)]
pub struct DeleteReservation {
    pub reservation_id: ReservationId,
    pub requested_user: UserId,
}

#[derive(new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub requested_user: UserId,
    pub seats: Option<i32>,
    pub total: Option<i64>,
    pub status: Option<ReservationStatus>,
}
