use crate::database::model::experience::parse_enum;
use chrono::{DateTime, Utc};
use kernel::model::{
    experience::Currency,
    id::{ExperienceId, GuideId, ReservationId, UserId},
    reservation::{Reservation, ReservationExperience, ReservationStatus},
};
use shared::error::AppError;

/// Reservation joined with its experience summary.
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub seats: i32,
    pub total: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub experience_id: ExperienceId,
    pub guide_id: GuideId,
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub price_per_person: i64,
    pub currency: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            user_id,
            seats,
            total,
            status,
            created_at,
            updated_at,
            experience_id,
            guide_id,
            title,
            location,
            date,
            price_per_person,
            currency,
        } = value;
        Ok(Reservation {
            reservation_id,
            reserved_by: user_id,
            seats,
            total,
            status: parse_enum::<ReservationStatus>(&status)?,
            created_at,
            updated_at,
            experience: ReservationExperience {
                experience_id,
                guide_id,
                title,
                location,
                date,
                price_per_person,
                currency: parse_enum::<Currency>(&currency)?,
            },
        })
    }
}

/// Pre-booking snapshot used inside the reservation-creation transaction.
#[derive(sqlx::FromRow)]
pub struct BookableExperienceRow {
    pub experience_id: ExperienceId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub min_group_size: i32,
    pub max_group_size: i32,
    pub price_per_person: i64,
    pub guide_user_id: UserId,
}

/// Snapshot used inside the cancellation transaction.
#[derive(sqlx::FromRow)]
pub struct CancellableReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub status: String,
    pub experience_id: ExperienceId,
    pub title: String,
    pub guide_user_id: UserId,
}
