use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    experience::Currency,
    id::{ExperienceId, GuideId, ReservationId, UserId},
    reservation::{Reservation, ReservationExperience, ReservationStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub experience_id: ExperienceId,
    #[garde(range(min = 1))]
    pub seats: i32,
    #[garde(range(min = 1))]
    pub total: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub reservation_id: ReservationId,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(inner(range(min = 1)))]
    pub seats: Option<i32>,
    #[garde(inner(range(min = 1)))]
    pub total: Option<i64>,
    #[garde(skip)]
    pub status: Option<ReservationStatus>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub seats: i32,
    pub total: i64,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub experience: ReservationExperienceResponse,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            reserved_by,
            seats,
            total,
            status,
            created_at,
            updated_at: _,
            experience,
        } = value;
        Self {
            reservation_id,
            reserved_by,
            seats,
            total,
            status,
            created_at,
            experience: experience.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationExperienceResponse {
    pub experience_id: ExperienceId,
    pub guide_id: GuideId,
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub price_per_person: i64,
    pub currency: Currency,
}

impl From<ReservationExperience> for ReservationExperienceResponse {
    fn from(value: ReservationExperience) -> Self {
        let ReservationExperience {
            experience_id,
            guide_id,
            title,
            location,
            date,
            price_per_person,
            currency,
        } = value;
        Self {
            experience_id,
            guide_id,
            title,
            location,
            date,
            price_per_person,
            currency,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}
