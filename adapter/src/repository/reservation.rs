use crate::database::{
    model::{
        experience::parse_enum,
        reservation::{BookableExperienceRow, CancellableReservationRow, ReservationRow},
    },
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    experience::ExperienceStatus,
    id::{ExperienceId, ReservationId, UserId},
    reservation::{
        event::{CancelReservation, CreateReservation, DeleteReservation, UpdateReservation},
        BookedReservation, CancelledReservation, Reservation, ReservationStatus,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

const RESERVATION_COLUMNS: &str = r#"
    r.reservation_id,
    r.user_id,
    r.seats,
    r.total,
    r.status,
    r.created_at,
    r.updated_at,
    e.experience_id,
    e.guide_id,
    e.title,
    e.location,
    e.date,
    e.price_per_person,
    e.currency
"#;

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<BookedReservation> {
        let mut tx = self.db.begin().await?;

        // Snapshot the experience together with the owning guide's user id.
        // The row lock serializes concurrent bookings of the same experience
        // up to the conditional update below.
        let row: Option<BookableExperienceRow> = sqlx::query_as(
            r#"
                SELECT
                    e.experience_id,
                    e.title,
                    e.date,
                    e.status,
                    e.min_group_size,
                    e.max_group_size,
                    e.price_per_person,
                    g.user_id AS guide_user_id
                FROM experiences AS e
                INNER JOIN guides AS g ON g.guide_id = e.guide_id
                WHERE e.experience_id = $1
                FOR UPDATE OF e
            "#,
        )
        .bind(event.experience_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(experience) = row else {
            return Err(AppError::EntityNotFound(format!(
                "experience ({}) not found",
                event.experience_id
            )));
        };

        if parse_enum::<ExperienceStatus>(&experience.status)? != ExperienceStatus::Published {
            return Err(AppError::UnprocessableEntity(format!(
                "experience ({}) is not open for booking",
                event.experience_id
            )));
        }

        // A guide cannot reserve their own experience.
        if experience.guide_user_id == event.reserved_by {
            return Err(AppError::ForbiddenOperation(
                "cannot reserve your own experience".into(),
            ));
        }

        if event.seats < experience.min_group_size || event.seats > experience.max_group_size {
            return Err(AppError::RequestParameterError(format!(
                "seats must be between {} and {}",
                experience.min_group_size, experience.max_group_size
            )));
        }

        // The client-sent total is a checksum, not the source of truth.
        let expected_total = i64::from(event.seats) * experience.price_per_person;
        if event.total != expected_total {
            return Err(AppError::RequestParameterError(format!(
                "total must equal seats * pricePerPerson ({expected_total})"
            )));
        }

        // Atomic claim of the booked flag: a concurrent reservation that got
        // here first makes this affect zero rows, which is a conflict.
        let claimed = sqlx::query(
            r#"
                UPDATE experiences
                SET booked = TRUE
                WHERE experience_id = $1 AND booked = FALSE
            "#,
        )
        .bind(event.experience_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if claimed.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "experience ({}) is already booked",
                event.experience_id
            )));
        }

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations (reservation_id, experience_id, user_id, seats, total, status)
                VALUES ($1, $2, $3, $4, $5, 'confirmed')
            "#,
        )
        .bind(reservation_id)
        .bind(event.experience_id)
        .bind(event.reserved_by)
        .bind(event.seats)
        .bind(event.total)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(BookedReservation {
            reservation_id,
            experience_id: experience.experience_id,
            experience_title: experience.title,
            experience_date: experience.date,
            guide_user_id: experience.guide_user_id,
            seats: event.seats,
            total: event.total,
        })
    }

    async fn cancel(&self, event: CancelReservation) -> AppResult<CancelledReservation> {
        let mut tx = self.db.begin().await?;

        let row: Option<CancellableReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    r.reservation_id,
                    r.user_id,
                    r.status,
                    e.experience_id,
                    e.title,
                    g.user_id AS guide_user_id
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                INNER JOIN guides AS g ON g.guide_id = e.guide_id
                WHERE r.reservation_id = $1
                FOR UPDATE OF r
            "#,
        )
        .bind(event.reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(reservation) = row else {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            )));
        };

        if event.requested_user != reservation.user_id
            && event.requested_user != reservation.guide_user_id
        {
            return Err(AppError::ForbiddenOperation(
                "only the customer or the guide may cancel this reservation".into(),
            ));
        }

        let status = parse_enum::<ReservationStatus>(&reservation.status)?;
        if status == ReservationStatus::Cancelled {
            // Cancelling twice is a no-op; the slot was already released.
            return Ok(CancelledReservation {
                reservation_id: reservation.reservation_id,
                experience_id: reservation.experience_id,
                experience_title: reservation.title,
                guide_user_id: reservation.guide_user_id,
                cancelled_by: event.requested_user,
                already_cancelled: true,
            });
        }

        sqlx::query("UPDATE reservations SET status = 'cancelled' WHERE reservation_id = $1")
            .bind(event.reservation_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        // Cancellation always frees the slot, in the same transaction as the
        // status write.
        sqlx::query("UPDATE experiences SET booked = FALSE WHERE experience_id = $1")
            .bind(reservation.experience_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(CancelledReservation {
            reservation_id: reservation.reservation_id,
            experience_id: reservation.experience_id,
            experience_title: reservation.title,
            guide_user_id: reservation.guide_user_id,
            cancelled_by: event.requested_user,
            already_cancelled: false,
        })
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<()> {
        // Cancellation has its own side effects and must go through cancel().
        if event.status == Some(ReservationStatus::Cancelled) {
            return Err(AppError::RequestParameterError(
                "use the cancel operation to cancel a reservation".into(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let row: Option<(UserId, i32, String, i64, i32, i32)> = sqlx::query_as(
            r#"
                SELECT r.user_id, r.seats, r.status, e.price_per_person,
                       e.min_group_size, e.max_group_size
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                WHERE r.reservation_id = $1
                FOR UPDATE OF r
            "#,
        )
        .bind(event.reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some((user_id, current_seats, _status, price_per_person, min_size, max_size)) = row
        else {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            )));
        };

        if event.requested_user != user_id {
            return Err(AppError::ForbiddenOperation(
                "only the reserving user may update this reservation".into(),
            ));
        }

        let seats = event.seats.unwrap_or(current_seats);
        if seats < min_size || seats > max_size {
            return Err(AppError::RequestParameterError(format!(
                "seats must be between {min_size} and {max_size}"
            )));
        }
        let expected_total = i64::from(seats) * price_per_person;
        if let Some(total) = event.total {
            if total != expected_total {
                return Err(AppError::RequestParameterError(format!(
                    "total must equal seats * pricePerPerson ({expected_total})"
                )));
            }
        }

        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET seats = $1, total = $2, status = COALESCE($3, status)
                WHERE reservation_id = $4
            "#,
        )
        .bind(seats)
        .bind(expected_total)
        .bind(event.status.map(|s| s.as_ref().to_string()))
        .bind(event.reservation_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                WHERE r.reservation_id = $1
            "#
        ))
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                ORDER BY r.created_at ASC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                WHERE r.user_id = $1
                ORDER BY r.created_at ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_active_by_experience_id(
        &self,
        experience_id: ExperienceId,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                WHERE r.experience_id = $1 AND r.status <> 'cancelled'
                ORDER BY r.created_at ASC
            "#
        ))
        .bind(experience_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn delete(&self, event: DeleteReservation) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let row: Option<CancellableReservationRow> = sqlx::query_as(
            r#"
                SELECT
                    r.reservation_id,
                    r.user_id,
                    r.status,
                    e.experience_id,
                    e.title,
                    g.user_id AS guide_user_id
                FROM reservations AS r
                INNER JOIN experiences AS e ON e.experience_id = r.experience_id
                INNER JOIN guides AS g ON g.guide_id = e.guide_id
                WHERE r.reservation_id = $1
                FOR UPDATE OF r
            "#,
        )
        .bind(event.reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(reservation) = row else {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            )));
        };

        if event.requested_user != reservation.user_id
            && event.requested_user != reservation.guide_user_id
        {
            return Err(AppError::ForbiddenOperation(
                "only the customer or the guide may delete this reservation".into(),
            ));
        }

        // Removing a live reservation must not strand the booked flag.
        if parse_enum::<ReservationStatus>(&reservation.status)? != ReservationStatus::Cancelled {
            sqlx::query("UPDATE experiences SET booked = FALSE WHERE experience_id = $1")
                .bind(reservation.experience_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        }

        sqlx::query("DELETE FROM reservations WHERE reservation_id = $1")
            .bind(event.reservation_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn complete_by_experience_id(&self, experience_id: ExperienceId) -> AppResult<u64> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET status = 'completed'
                WHERE experience_id = $1 AND status = 'confirmed'
            "#,
        )
        .bind(experience_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::experience::ExperienceRepositoryImpl;
    use crate::repository::fixtures;
    use kernel::repository::experience::ExperienceRepository;

    #[sqlx::test(migrations = "../migrations")]
    async fn create_and_fetch_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let customer_id = fixtures::seed_user(&pool, "customer@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool.clone());
        let booked = repo
            .create(CreateReservation::new(experience_id, customer_id, 2, 17000))
            .await?;
        assert_eq!(booked.seats, 2);
        assert_eq!(booked.total, 17000);

        let reservation = repo.find_by_id(booked.reservation_id).await?.unwrap();
        assert_eq!(reservation.seats, 2);
        assert_eq!(reservation.total, 17000);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.experience.experience_id, experience_id);

        let experience_repo = ExperienceRepositoryImpl::new(pool);
        let experience = experience_repo.find_by_id(experience_id).await?.unwrap();
        assert!(experience.booked);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_a_booked_experience_conflicts(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let first = fixtures::seed_user(&pool, "first@vertika.mx").await?;
        let second = fixtures::seed_user(&pool, "second@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool);
        repo.create(CreateReservation::new(experience_id, first, 2, 17000))
            .await?;

        let res = repo
            .create(CreateReservation::new(experience_id, second, 2, 17000))
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn guide_cannot_book_own_experience(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (guide_user_id, guide_id) =
            fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool);
        let res = repo
            .create(CreateReservation::new(experience_id, guide_user_id, 2, 17000))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn seats_and_total_are_validated_against_the_experience(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let customer_id = fixtures::seed_user(&pool, "customer@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool);

        // Seats above the capacity range (max is 6).
        let res = repo
            .create(CreateReservation::new(experience_id, customer_id, 7, 59500))
            .await;
        assert!(matches!(res, Err(AppError::RequestParameterError(_))));

        // Total not matching seats * pricePerPerson.
        let res = repo
            .create(CreateReservation::new(experience_id, customer_id, 2, 1))
            .await;
        assert!(matches!(res, Err(AppError::RequestParameterError(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn cancel_releases_the_slot_and_is_idempotent(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let customer_id = fixtures::seed_user(&pool, "customer@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool.clone());
        let booked = repo
            .create(CreateReservation::new(experience_id, customer_id, 2, 17000))
            .await?;

        let cancelled = repo
            .cancel(CancelReservation::new(booked.reservation_id, customer_id))
            .await?;
        assert!(!cancelled.already_cancelled);

        let experience_repo = ExperienceRepositoryImpl::new(pool.clone());
        let experience = experience_repo.find_by_id(experience_id).await?.unwrap();
        assert!(!experience.booked);

        // A second cancellation must not error and must leave the slot free.
        let cancelled = repo
            .cancel(CancelReservation::new(booked.reservation_id, customer_id))
            .await?;
        assert!(cancelled.already_cancelled);
        let experience = experience_repo.find_by_id(experience_id).await?.unwrap();
        assert!(!experience.booked);

        let reservation = repo.find_by_id(booked.reservation_id).await?.unwrap();
        assert_eq!(reservation.status, ReservationStatus::Cancelled);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn cancelled_experience_can_be_booked_again(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let first = fixtures::seed_user(&pool, "first@vertika.mx").await?;
        let second = fixtures::seed_user(&pool, "second@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool);
        let booked = repo
            .create(CreateReservation::new(experience_id, first, 2, 17000))
            .await?;
        repo.cancel(CancelReservation::new(booked.reservation_id, first))
            .await?;

        // The slot is free again for another customer.
        let rebooked = repo
            .create(CreateReservation::new(experience_id, second, 3, 25500))
            .await?;
        assert_ne!(rebooked.reservation_id, booked.reservation_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn delete_checks_ownership_and_releases_the_slot(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let customer_id = fixtures::seed_user(&pool, "customer@vertika.mx").await?;
        let stranger = fixtures::seed_user(&pool, "stranger@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool.clone());
        let booked = repo
            .create(CreateReservation::new(experience_id, customer_id, 2, 17000))
            .await?;

        let res = repo
            .delete(DeleteReservation::new(booked.reservation_id, stranger))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));

        repo.delete(DeleteReservation::new(booked.reservation_id, customer_id))
            .await?;
        assert!(repo.find_by_id(booked.reservation_id).await?.is_none());

        // The slot is free again for another customer.
        let experience_repo = ExperienceRepositoryImpl::new(pool);
        let experience = experience_repo.find_by_id(experience_id).await?.unwrap();
        assert!(!experience.booked);
        repo.create(CreateReservation::new(experience_id, stranger, 2, 17000))
            .await?;

        let res = repo
            .delete(DeleteReservation::new(ReservationId::new(), customer_id))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn completing_an_experience_skips_cancelled_reservations(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let first = fixtures::seed_user(&pool, "first@vertika.mx").await?;
        let second = fixtures::seed_user(&pool, "second@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool);
        let cancelled = repo
            .create(CreateReservation::new(experience_id, first, 2, 17000))
            .await?;
        repo.cancel(CancelReservation::new(cancelled.reservation_id, first))
            .await?;
        let confirmed = repo
            .create(CreateReservation::new(experience_id, second, 3, 25500))
            .await?;

        let active = repo.find_active_by_experience_id(experience_id).await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].reservation_id, confirmed.reservation_id);

        assert_eq!(repo.complete_by_experience_id(experience_id).await?, 1);
        let reservation = repo.find_by_id(confirmed.reservation_id).await?.unwrap();
        assert_eq!(reservation.status, ReservationStatus::Completed);
        let reservation = repo.find_by_id(cancelled.reservation_id).await?.unwrap();
        assert_eq!(reservation.status, ReservationStatus::Cancelled);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn update_rejects_cancellation_and_recomputes_total(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let customer_id = fixtures::seed_user(&pool, "customer@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ReservationRepositoryImpl::new(pool);
        let booked = repo
            .create(CreateReservation::new(experience_id, customer_id, 2, 17000))
            .await?;

        let res = repo
            .update(UpdateReservation::new(
                booked.reservation_id,
                customer_id,
                None,
                None,
                Some(ReservationStatus::Cancelled),
            ))
            .await;
        assert!(matches!(res, Err(AppError::RequestParameterError(_))));

        repo.update(UpdateReservation::new(
            booked.reservation_id,
            customer_id,
            Some(3),
            None,
            None,
        ))
        .await?;
        let reservation = repo.find_by_id(booked.reservation_id).await?.unwrap();
        assert_eq!(reservation.seats, 3);
        assert_eq!(reservation.total, 25500);

        Ok(())
    }
}
