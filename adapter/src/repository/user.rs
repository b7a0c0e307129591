use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use bcrypt::{hash, DEFAULT_COST};
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

const USER_COLUMNS: &str = r#"
    user_id,
    name,
    email,
    roles,
    email_verified
"#;

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let existing: Option<(UserId,)> =
            sqlx::query_as("SELECT user_id FROM users WHERE email = $1")
                .bind(&event.email)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if existing.is_some() {
            return Err(AppError::ResourceConflict(
                "an account with this email already exists".into(),
            ));
        }

        let user_id = UserId::new();
        let hashed_password = hash(event.password, DEFAULT_COST)?;
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, name, email, password_hash, verification_token)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(event.name)
        .bind(event.email)
        .bind(hashed_password)
        .bind(event.verification_token)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no user record has been created".into(),
            ));
        }

        Ok(user_id)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn verify_email(&self, token: &str) -> AppResult<()> {
        // Consuming the token makes the link single-use.
        let res = sqlx::query(
            r#"
                UPDATE users
                SET email_verified = TRUE, verification_token = NULL
                WHERE verification_token = $1
            "#,
        )
        .bind(token)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "verification token is invalid or already used".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;

    #[sqlx::test(migrations = "../migrations")]
    async fn register_verify_and_reject_duplicates(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));
        let user_id = repo
            .create(CreateUser::new(
                "Ana Cordero".into(),
                "ana@vertika.mx".into(),
                "s3cretpass".into(),
                "verify-me".into(),
            ))
            .await?;

        let user = repo.find_by_id(user_id).await?.unwrap();
        assert_eq!(user.email, "ana@vertika.mx");
        assert_eq!(user.roles, vec![Role::Customer]);
        assert!(!user.email_verified);

        repo.verify_email("verify-me").await?;
        let user = repo.find_by_email("ana@vertika.mx").await?.unwrap();
        assert!(user.email_verified);

        // The token was consumed.
        let res = repo.verify_email("verify-me").await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let res = repo
            .create(CreateUser::new(
                "Ana Again".into(),
                "ana@vertika.mx".into(),
                "other".into(),
                "t".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }
}
