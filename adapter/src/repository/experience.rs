use crate::database::{
    model::experience::{parse_enum, ExperienceRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    experience::{
        event::{
            CreateExperience, DeleteExperience, RepublishExperience, UpdateExperience,
            UpdateExperienceStatus,
        },
        Experience, ExperienceListOptions, ExperienceStatus,
    },
    id::{ExperienceId, UserId},
};
use kernel::repository::experience::ExperienceRepository;
use shared::error::{AppError, AppResult};
use sqlx::{Postgres, QueryBuilder};

#[derive(new)]
pub struct ExperienceRepositoryImpl {
    db: ConnectionPool,
}

const EXPERIENCE_COLUMNS: &str = r#"
    experience_id,
    guide_id,
    title,
    description,
    activity,
    location,
    difficulty,
    date,
    min_group_size,
    max_group_size,
    price_per_person,
    currency,
    photos,
    status,
    booked,
    rating,
    created_at,
    updated_at
"#;

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryImpl {
    async fn create(&self, event: CreateExperience) -> AppResult<ExperienceId> {
        if event.min_group_size > event.max_group_size || event.min_group_size < 1 {
            return Err(AppError::RequestParameterError(
                "minGroupSize must be positive and not exceed maxGroupSize".into(),
            ));
        }

        let experience_id = ExperienceId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO experiences
                (experience_id, guide_id, title, description, activity, location,
                 difficulty, date, min_group_size, max_group_size, price_per_person,
                 currency, photos, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 'draft')
            "#,
        )
        .bind(experience_id)
        .bind(event.guide_id)
        .bind(event.title)
        .bind(event.description)
        .bind(event.activity.as_ref())
        .bind(event.location)
        .bind(event.difficulty.as_ref())
        .bind(event.date)
        .bind(event.min_group_size)
        .bind(event.max_group_size)
        .bind(event.price_per_person)
        .bind(event.currency.as_ref())
        .bind(event.photos)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no experience record has been created".into(),
            ));
        }

        Ok(experience_id)
    }

    async fn update(&self, event: UpdateExperience) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let (_, min_size, max_size) = self
            .lock_owned_row(&mut tx, event.experience_id, event.requested_user)
            .await?;

        let min_group_size = event.min_group_size.unwrap_or(min_size);
        let max_group_size = event.max_group_size.unwrap_or(max_size);
        if min_group_size > max_group_size || min_group_size < 1 {
            return Err(AppError::RequestParameterError(
                "minGroupSize must be positive and not exceed maxGroupSize".into(),
            ));
        }

        sqlx::query(
            r#"
                UPDATE experiences
                SET title = COALESCE($1, title),
                    description = COALESCE($2, description),
                    activity = COALESCE($3, activity),
                    location = COALESCE($4, location),
                    difficulty = COALESCE($5, difficulty),
                    date = COALESCE($6, date),
                    min_group_size = $7,
                    max_group_size = $8,
                    price_per_person = COALESCE($9, price_per_person),
                    currency = COALESCE($10, currency),
                    photos = COALESCE($11, photos)
                WHERE experience_id = $12
            "#,
        )
        .bind(event.title)
        .bind(event.description)
        .bind(event.activity.map(|a| a.as_ref().to_string()))
        .bind(event.location)
        .bind(event.difficulty.map(|d| d.as_ref().to_string()))
        .bind(event.date)
        .bind(min_group_size)
        .bind(max_group_size)
        .bind(event.price_per_person)
        .bind(event.currency.map(|c| c.as_ref().to_string()))
        .bind(event.photos)
        .bind(event.experience_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn update_status(&self, event: UpdateExperienceStatus) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let (status, _, _) = self
            .lock_owned_row(&mut tx, event.experience_id, event.requested_user)
            .await?;

        let current = parse_enum::<ExperienceStatus>(&status)?;
        if !current.can_transition_to(event.status) {
            return Err(AppError::UnprocessableEntity(format!(
                "cannot transition experience from {} to {}",
                current.as_ref(),
                event.status.as_ref()
            )));
        }

        sqlx::query("UPDATE experiences SET status = $1 WHERE experience_id = $2")
            .bind(event.status.as_ref())
            .bind(event.experience_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn republish(&self, event: RepublishExperience) -> AppResult<ExperienceId> {
        let mut tx = self.db.begin().await?;

        self.lock_owned_row(&mut tx, event.experience_id, event.requested_user)
            .await?;

        // Clone the descriptive fields into a fresh draft: new id, unbooked,
        // rating reset.
        let new_id = ExperienceId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO experiences
                (experience_id, guide_id, title, description, activity, location,
                 difficulty, date, min_group_size, max_group_size, price_per_person,
                 currency, photos, status, booked, rating)
                SELECT $1, guide_id, title, description, activity, location,
                       difficulty, date, min_group_size, max_group_size, price_per_person,
                       currency, photos, 'draft', FALSE, 0
                FROM experiences
                WHERE experience_id = $2
            "#,
        )
        .bind(new_id)
        .bind(event.experience_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no experience record has been cloned".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(new_id)
    }

    async fn delete(&self, event: DeleteExperience) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        self.lock_owned_row(&mut tx, event.experience_id, event.requested_user)
            .await?;

        sqlx::query("DELETE FROM experiences WHERE experience_id = $1")
            .bind(event.experience_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn find_by_id(&self, experience_id: ExperienceId) -> AppResult<Option<Experience>> {
        let row: Option<ExperienceRow> = sqlx::query_as(&format!(
            r#"
                SELECT {EXPERIENCE_COLUMNS}
                FROM experiences
                WHERE experience_id = $1
            "#
        ))
        .bind(experience_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Experience::try_from).transpose()
    }

    async fn find_all(&self, options: ExperienceListOptions) -> AppResult<Vec<Experience>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            r#"
                SELECT {EXPERIENCE_COLUMNS}
                FROM experiences
                WHERE status = 'published'
            "#
        ));

        if let Some(search) = options.search {
            let pattern = format!("%{search}%");
            builder
                .push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR location ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(start_date) = options.start_date {
            builder.push(" AND date >= ").push_bind(start_date);
        }
        if let Some(end_date) = options.end_date {
            builder.push(" AND date <= ").push_bind(end_date);
        }
        if let Some(people) = options.people {
            builder
                .push(" AND min_group_size <= ")
                .push_bind(people)
                .push(" AND max_group_size >= ")
                .push_bind(people);
        }
        if let Some(activity) = options.activity {
            builder
                .push(" AND activity = ")
                .push_bind(activity.as_ref().to_string());
        }
        if let Some(min_price) = options.min_price {
            builder.push(" AND price_per_person >= ").push_bind(min_price);
        }
        if let Some(max_price) = options.max_price {
            builder.push(" AND price_per_person <= ").push_bind(max_price);
        }
        builder.push(" ORDER BY date ASC");

        let rows: Vec<ExperienceRow> = builder
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Experience::try_from).collect()
    }
}

impl ExperienceRepositoryImpl {
    /// Locks the experience row, returning (status, min_group_size,
    /// max_group_size). Fails with 404 when the experience does not exist and
    /// 403 when the requesting user is not the owning guide.
    async fn lock_owned_row(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        experience_id: ExperienceId,
        requested_user: UserId,
    ) -> AppResult<(String, i32, i32)> {
        let row: Option<(UserId, String, i32, i32)> = sqlx::query_as(
            r#"
                SELECT g.user_id, e.status, e.min_group_size, e.max_group_size
                FROM experiences AS e
                INNER JOIN guides AS g ON g.guide_id = e.guide_id
                WHERE e.experience_id = $1
                FOR UPDATE OF e
            "#,
        )
        .bind(experience_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some((owner_user_id, status, min_size, max_size)) = row else {
            return Err(AppError::EntityNotFound(format!(
                "experience ({experience_id}) not found"
            )));
        };
        if owner_user_id != requested_user {
            return Err(AppError::ForbiddenOperation(
                "only the owning guide may modify this experience".into(),
            ));
        }
        Ok((status, min_size, max_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;
    use chrono::{Duration, Utc};
    use kernel::model::experience::{Activity, Currency, Difficulty};

    #[sqlx::test(migrations = "../migrations")]
    async fn register_and_find_experience(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;

        let repo = ExperienceRepositoryImpl::new(pool);
        let experience_id = repo
            .create(CreateExperience::new(
                guide_id,
                "Nevado de Toluca hike".into(),
                "Day hike around the crater lakes".into(),
                Activity::Hiking,
                "Nevado de Toluca".into(),
                Difficulty::Moderate,
                Utc::now() + Duration::days(14),
                2,
                8,
                1200,
                Currency::Mxn,
                vec!["https://cdn.example.com/toluca.jpg".into()],
            ))
            .await?;

        let experience = repo.find_by_id(experience_id).await?.unwrap();
        assert_eq!(experience.title, "Nevado de Toluca hike");
        assert_eq!(experience.status, ExperienceStatus::Draft);
        assert_eq!(experience.activity, Activity::Hiking);
        assert!(!experience.booked);
        assert_eq!(experience.rating, 0.0);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn lifecycle_transitions_are_guarded(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (guide_user_id, guide_id) =
            fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let stranger = fixtures::seed_user(&pool, "stranger@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ExperienceRepositoryImpl::new(pool);

        // A published experience cannot jump straight to completed.
        let res = repo
            .update_status(UpdateExperienceStatus::new(
                experience_id,
                ExperienceStatus::Completed,
                guide_user_id,
            ))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // Someone who is not the owner cannot transition at all.
        let res = repo
            .update_status(UpdateExperienceStatus::new(
                experience_id,
                ExperienceStatus::Progress,
                stranger,
            ))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation(_))));

        repo.update_status(UpdateExperienceStatus::new(
            experience_id,
            ExperienceStatus::Progress,
            guide_user_id,
        ))
        .await?;
        repo.update_status(UpdateExperienceStatus::new(
            experience_id,
            ExperienceStatus::Completed,
            guide_user_id,
        ))
        .await?;

        let experience = repo.find_by_id(experience_id).await?.unwrap();
        assert_eq!(experience.status, ExperienceStatus::Completed);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn republish_clones_as_fresh_draft(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (guide_user_id, guide_id) =
            fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let experience_id = fixtures::seed_published_experience(&pool, guide_id).await?;

        // Simulate a lived life: booked and rated.
        sqlx::query(
            "UPDATE experiences SET booked = TRUE, rating = 4.5 WHERE experience_id = $1",
        )
        .bind(experience_id)
        .execute(pool.inner_ref())
        .await?;

        let repo = ExperienceRepositoryImpl::new(pool);
        let clone_id = repo
            .republish(RepublishExperience::new(experience_id, guide_user_id))
            .await?;
        assert_ne!(clone_id, experience_id);

        let original = repo.find_by_id(experience_id).await?.unwrap();
        let clone = repo.find_by_id(clone_id).await?.unwrap();
        assert_eq!(clone.status, ExperienceStatus::Draft);
        assert!(!clone.booked);
        assert_eq!(clone.rating, 0.0);
        assert_eq!(clone.title, original.title);
        assert_eq!(clone.price_per_person, original.price_per_person);
        assert_eq!(clone.date, original.date);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn search_filters_published_experiences(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, guide_id) = fixtures::seed_verified_guide(&pool, "guide@vertika.mx").await?;
        let published = fixtures::seed_published_experience(&pool, guide_id).await?;

        let repo = ExperienceRepositoryImpl::new(pool);
        // A draft must never show up in search results.
        repo.create(CreateExperience::new(
            guide_id,
            "Draft only".into(),
            "Not yet published".into(),
            Activity::Trail,
            "La Marquesa".into(),
            Difficulty::Easy,
            Utc::now() + chrono::Duration::days(7),
            1,
            10,
            500,
            Currency::Mxn,
            vec![],
        ))
        .await?;

        let all = repo.find_all(ExperienceListOptions::default()).await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].experience_id, published);

        let hits = repo
            .find_all(ExperienceListOptions {
                search: Some("orizaba".into()),
                people: Some(4),
                activity: Some(Activity::Alpinism),
                ..Default::default()
            })
            .await?;
        assert_eq!(hits.len(), 1);

        // people=1 is below the experience's minGroupSize of 2.
        let misses = repo
            .find_all(ExperienceListOptions {
                people: Some(1),
                ..Default::default()
            })
            .await?;
        assert!(misses.is_empty());

        let misses = repo
            .find_all(ExperienceListOptions {
                max_price: Some(1000),
                ..Default::default()
            })
            .await?;
        assert!(misses.is_empty());

        Ok(())
    }
}
