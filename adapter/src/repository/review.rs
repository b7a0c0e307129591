use crate::database::{model::review::ReviewRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ExperienceId, GuideId, ReviewId, UserId},
    review::{event::CreateReview, Review},
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<ReviewId> {
        if !(0..=5).contains(&event.experience_rating) || !(0..=5).contains(&event.guide_rating) {
            return Err(AppError::RequestParameterError(
                "ratings must be between 0 and 5".into(),
            ));
        }

        let mut tx = self.db.begin().await?;

        let row: Option<(UserId, String, ExperienceId, GuideId)> = sqlx::query_as(
            r#"
                SELECT r.user_id, r.status, r.experience_id, e.guide_id
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

        let Some((reserved_by, status, experience_id, guide_id)) = row else {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            )));
        };
        if reserved_by != event.reviewed_by {
            return Err(AppError::ForbiddenOperation(
                "only the customer who booked may review".into(),
            ));
        }
        if status != "completed" {
            return Err(AppError::UnprocessableEntity(
                "only completed reservations can be reviewed".into(),
            ));
        }

        let existing: Option<(ReviewId,)> =
            sqlx::query_as("SELECT review_id FROM reviews WHERE reservation_id = $1")
                .bind(event.reservation_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if existing.is_some() {
            return Err(AppError::ResourceConflict(
                "this reservation has already been reviewed".into(),
            ));
        }

        let review_id = ReviewId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reviews
                (review_id, reservation_id, user_id, experience_id, guide_id,
                 experience_rating, guide_rating, comment, photos)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(review_id)
        .bind(event.reservation_id)
        .bind(event.reviewed_by)
        .bind(experience_id)
        .bind(guide_id)
        .bind(event.experience_rating)
        .bind(event.guide_rating)
        .bind(event.comment)
        .bind(event.photos)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no review record has been created".into(),
            ));
        }

        // Refresh both averages from the reviews table so they survive
        // concurrent writers.
        sqlx::query(
            r#"
                UPDATE experiences
                SET rating = (
                    SELECT AVG(experience_rating)::DOUBLE PRECISION
                    FROM reviews
                    WHERE experience_id = $1
                )
                WHERE experience_id = $1
            "#,
        )
        .bind(experience_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query(
            r#"
                UPDATE guides
                SET rating = (
                    SELECT AVG(guide_rating)::DOUBLE PRECISION
                    FROM reviews
                    WHERE guide_id = $1
                )
                WHERE guide_id = $1
            "#,
        )
        .bind(guide_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(review_id)
    }

    async fn find_by_experience_id(&self, experience_id: ExperienceId) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT
                    review_id,
                    reservation_id,
                    user_id,
                    experience_id,
                    guide_id,
                    experience_rating,
                    guide_rating,
                    comment,
                    photos,
                    created_at,
                    updated_at
                FROM reviews
                WHERE experience_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(experience_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{fixtures, reservation::ReservationRepositoryImpl};
    use kernel::model::reservation::event::CreateReservation;
    use kernel::repository::reservation::ReservationRepository;

    async fn completed_reservation(
        pool: &ConnectionPool,
    ) -> anyhow::Result<(
        UserId,
        GuideId,
        ExperienceId,
        kernel::model::id::ReservationId,
    )> {
        let (_, guide_id) = fixtures::seed_verified_guide(pool, "guide@vertika.mx").await?;
        let customer = fixtures::seed_user(pool, "customer@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(pool, guide_id).await?;

        let reservations = ReservationRepositoryImpl::new(pool.clone());
        let booked = reservations
            .create(CreateReservation::new(experience_id, customer, 3, 25500))
            .await?;
        sqlx::query("UPDATE reservations SET status = 'completed' WHERE reservation_id = $1")
            .bind(booked.reservation_id)
            .execute(pool.inner_ref())
            .await?;

        Ok((customer, guide_id, experience_id, booked.reservation_id))
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn review_updates_average_ratings(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (customer, guide_id, experience_id, reservation_id) =
            completed_reservation(&pool).await?;

        let repo = ReviewRepositoryImpl::new(pool.clone());
        repo.create(CreateReview::new(
            reservation_id,
            customer,
            5,
            4,
            Some("Unforgettable summit day".into()),
            vec![],
        ))
        .await?;

        let reviews = repo.find_by_experience_id(experience_id).await?;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].experience_rating, 5);

        let (experience_rating,): (f64,) =
            sqlx::query_as("SELECT rating FROM experiences WHERE experience_id = $1")
                .bind(experience_id)
                .fetch_one(pool.inner_ref())
                .await?;
        assert_eq!(experience_rating, 5.0);

        let (guide_rating,): (f64,) =
            sqlx::query_as("SELECT rating FROM guides WHERE guide_id = $1")
                .bind(guide_id)
                .fetch_one(pool.inner_ref())
                .await?;
        assert_eq!(guide_rating, 4.0);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn one_review_per_reservation(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (customer, _, _, reservation_id) = completed_reservation(&pool).await?;

        let repo = ReviewRepositoryImpl::new(pool);
        repo.create(CreateReview::new(reservation_id, customer, 4, 4, None, vec![]))
            .await?;

        let res = repo
            .create(CreateReview::new(reservation_id, customer, 1, 1, None, vec![]))
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn only_the_customer_may_review_completed_stays(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (guide_user_id, guide_id) =
            fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let customer = fixtures::seed_user(&pool, "customer@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let reservations = ReservationRepositoryImpl::new(pool.clone());
        let booked = reservations
            .create(CreateReservation::new(experience_id, customer, 2, 17000))
            .await?;

        let repo = ReviewRepositoryImpl::new(pool);

        // Still confirmed, not completed.
        let res = repo
            .create(CreateReview::new(
                booked.reservation_id,
                customer,
                5,
                5,
                None,
                vec![],
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        let res = repo
            .create(CreateReview::new(
                booked.reservation_id,
                guide_user_id,
                5,
                5,
                None,
                vec![],
            ))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));

        Ok(())
    }
}
