use crate::model::id::ReservationId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use shared::error::AppResult;

#[derive(Debug, Clone, new)]
pub struct MailRecipient {
    pub name: String,
    pub email: String,
}

#[derive(Debug, new)]
pub struct ReservationConfirmationMail {
    pub reservation_id: ReservationId,
    pub experience_title: String,
    pub experience_date: DateTime<Utc>,
    pub seats: i32,
    pub total: i64,
}

/// Transactional email port. Callers treat every send as best-effort: a
/// failure is logged and never fails the primary operation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_reservation_confirmation(
        &self,
        to: &MailRecipient,
        mail: &ReservationConfirmationMail,
    ) -> AppResult<()>;
    async fn send_review_request(
        &self,
        to: &MailRecipient,
        experience_title: &str,
    ) -> AppResult<()>;
    async fn send_verification_email(&self, to: &MailRecipient, token: &str) -> AppResult<()>;
}
