use crate::model::{
    experience::Currency,
    id::{ExperienceId, GuideId, ReservationId, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub seats: i32,
    pub total: i64,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub experience: ReservationExperience,
}

/// Experience summary embedded in a reservation read model.
#[derive(Debug, Clone)]
pub struct ReservationExperience {
    pub experience_id: ExperienceId,
    pub guide_id: GuideId,
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub price_per_person: i64,
    pub currency: Currency,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Result of a successful booking, carrying everything the follow-up side
/// effects (confirmation mail, guide notification) need without extra reads.
#[derive(Debug)]
pub struct BookedReservation {
    pub reservation_id: ReservationId,
    pub experience_id: ExperienceId,
    pub experience_title: String,
    pub experience_date: DateTime<Utc>,
    pub guide_user_id: UserId,
    pub seats: i32,
    pub total: i64,
}

#[derive(Debug)]
pub struct CancelledReservation {
    pub reservation_id: ReservationId,
    pub experience_id: ExperienceId,
    pub experience_title: String,
    pub guide_user_id: UserId,
    pub cancelled_by: UserId,
    /// True when the reservation was already cancelled; the operation is a
    /// no-op then and no side effects should fire.
    pub already_cancelled: bool,
}
