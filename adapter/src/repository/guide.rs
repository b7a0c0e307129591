use crate::database::{model::guide::GuideRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    guide::{event::CreateGuide, Guide},
    id::{GuideId, UserId},
};
use kernel::repository::guide::GuideRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct GuideRepositoryImpl {
    db: ConnectionPool,
}

const GUIDE_COLUMNS: &str = r#"
    guide_id,
    user_id,
    bio,
    certifications,
    experience_years,
    specialties,
    languages,
    verified,
    rating,
    created_at,
    updated_at
"#;

#[async_trait]
impl GuideRepository for GuideRepositoryImpl {
    async fn create(&self, event: CreateGuide) -> AppResult<GuideId> {
        let existing: Option<(GuideId,)> =
            sqlx::query_as("SELECT guide_id FROM guides WHERE user_id = $1")
                .bind(event.user_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if existing.is_some() {
            return Err(AppError::ResourceConflict(
                "a guide profile already exists for this user".into(),
            ));
        }

        let guide_id = GuideId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO guides
                (guide_id, user_id, bio, certifications, experience_years,
                 specialties, languages)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(guide_id)
        .bind(event.user_id)
        .bind(event.bio)
        .bind(event.certifications)
        .bind(event.experience_years)
        .bind(event.specialties)
        .bind(event.languages)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no guide record has been created".into(),
            ));
        }

        Ok(guide_id)
    }

    async fn find_by_id(&self, guide_id: GuideId) -> AppResult<Option<Guide>> {
        let row: Option<GuideRow> = sqlx::query_as(&format!(
            "SELECT {GUIDE_COLUMNS} FROM guides WHERE guide_id = $1"
        ))
        .bind(guide_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Guide::from))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Guide>> {
        let row: Option<GuideRow> = sqlx::query_as(&format!(
            "SELECT {GUIDE_COLUMNS} FROM guides WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Guide::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Guide>> {
        let rows: Vec<GuideRow> = sqlx::query_as(&format!(
            "SELECT {GUIDE_COLUMNS} FROM guides ORDER BY rating DESC, created_at ASC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Guide::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;

    #[sqlx::test(migrations = "../migrations")]
    async fn one_guide_profile_per_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let user_id = fixtures::seed_user(&pool, "guide@vertika.mx").await?;

        let repo = GuideRepositoryImpl::new(pool);
        let guide_id = repo
            .create(CreateGuide::new(
                user_id,
                "Rock and ice, Valle de Bravo".into(),
                vec!["UIAGM".into()],
                6,
                vec!["climbing".into()],
                vec!["es".into()],
            ))
            .await?;

        let guide = repo.find_by_user_id(user_id).await?.unwrap();
        assert_eq!(guide.guide_id, guide_id);
        assert!(!guide.verified);
        assert_eq!(guide.rating, 0.0);

        let res = repo
            .create(CreateGuide::new(
                user_id,
                "Second profile".into(),
                vec![],
                1,
                vec![],
                vec![],
            ))
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }
}
