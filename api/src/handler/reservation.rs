use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        CreateReservationRequest, CreateReservationResponse, ReservationResponse,
        ReservationsResponse, UpdateReservationRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::{
    mailer::{MailRecipient, ReservationConfirmationMail},
    model::{
        id::{ReservationId, UserId},
        notification::event::CreateNotification,
        reservation::{
            event::{
                CancelReservation, CreateReservation, DeleteReservation, UpdateReservation,
            },
            ReservationStatus,
        },
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::notification::notify;

pub async fn create_reservation(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<CreateReservationResponse>)> {
    req.validate()?;

    let booked = registry
        .reservation_repository()
        .create(CreateReservation::new(
            req.experience_id,
            user.id(),
            req.seats,
            req.total,
        ))
        .await?;

    // Side effects after commit, both best-effort.
    let recipient = MailRecipient::new(user.user.name.clone(), user.user.email.clone());
    let mail = ReservationConfirmationMail::new(
        booked.reservation_id,
        booked.experience_title.clone(),
        booked.experience_date,
        booked.seats,
        booked.total,
    );
    if let Err(e) = registry
        .mailer()
        .send_reservation_confirmation(&recipient, &mail)
        .await
    {
        tracing::warn!(
            error = %e,
            reservation_id = %booked.reservation_id,
            "failed to send reservation confirmation email"
        );
    }

    notify(
        &registry,
        CreateNotification::new(
            booked.guide_user_id,
            Some(user.id()),
            "reservation_created".into(),
            Some("New reservation".into()),
            format!(
                "{} reserved \"{}\" ({} seats)",
                user.user.name, booked.experience_title, booked.seats
            ),
            Some(serde_json::json!({
                "reservationId": booked.reservation_id,
                "experienceId": booked.experience_id,
                "seats": booked.seats,
                "total": booked.total,
            })),
        ),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse {
            reservation_id: booked.reservation_id,
        }),
    ))
}

pub async fn show_reservation_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_all()
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .map(ReservationResponse::from)
        .map(Json)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("reservation ({reservation_id}) not found"))
        })
}

pub async fn show_reservations_by_user_id(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_user_id(user_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn update_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    // A cancellation must release the booked flag and fire the cancel side
    // effects, so it goes through the cancel path.
    if req.status == Some(ReservationStatus::Cancelled) {
        return do_cancel(&user, reservation_id, &registry).await;
    }

    registry
        .reservation_repository()
        .update(UpdateReservation::new(
            reservation_id,
            user.id(),
            req.seats,
            req.total,
            req.status,
        ))
        .await?;
    Ok(StatusCode::OK)
}

pub async fn cancel_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    do_cancel(&user, reservation_id, &registry).await
}

async fn do_cancel(
    user: &AuthorizedUser,
    reservation_id: ReservationId,
    registry: &AppRegistry,
) -> AppResult<StatusCode> {
    let cancelled = registry
        .reservation_repository()
        .cancel(CancelReservation::new(reservation_id, user.id()))
        .await?;

    if !cancelled.already_cancelled {
        notify(
            registry,
            CreateNotification::new(
                cancelled.guide_user_id,
                Some(cancelled.cancelled_by),
                "reservation_cancelled".into(),
                Some("Reservation cancelled".into()),
                format!(
                    "{} cancelled a reservation for \"{}\"",
                    user.user.name, cancelled.experience_title
                ),
                Some(serde_json::json!({
                    "reservationId": cancelled.reservation_id,
                    "experienceId": cancelled.experience_id,
                })),
            ),
        )
        .await;
    }

    Ok(StatusCode::OK)
}

pub async fn delete_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .reservation_repository()
        .delete(DeleteReservation::new(reservation_id, user.id()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
