use crate::model::{
    id::{ExperienceId, ReservationId, UserId},
    reservation::{
        event::{CancelReservation, CreateReservation, DeleteReservation, UpdateReservation},
        BookedReservation, CancelledReservation, Reservation,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Books an experience. The booked-flag claim and the reservation insert
    /// happen in one transaction; a concurrent booking loses with a conflict.
    async fn create(&self, event: CreateReservation) -> AppResult<BookedReservation>;
    /// Cancels and frees the experience slot in one transaction. Idempotent:
    /// cancelling an already cancelled reservation is a successful no-op.
    async fn cancel(&self, event: CancelReservation) -> AppResult<CancelledReservation>;
    /// Partial update of seats/total and non-cancelling status changes.
    async fn update(&self, event: UpdateReservation) -> AppResult<()>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
    /// Non-cancelled reservations referencing the experience.
    async fn find_active_by_experience_id(
        &self,
        experience_id: ExperienceId,
    ) -> AppResult<Vec<Reservation>>;
    /// Removes the reservation. Only the customer or the guide may delete;
    /// deleting a non-cancelled reservation frees the experience slot in the
    /// same transaction.
    async fn delete(&self, event: DeleteReservation) -> AppResult<()>;
    /// Flips every confirmed reservation of the experience to completed,
    /// returning how many were affected. Used when a guide closes out an
    /// experience.
    async fn complete_by_experience_id(&self, experience_id: ExperienceId) -> AppResult<u64>;
}
