use crate::database::{model::notification::NotificationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{NotificationId, UserId},
    notification::{event::CreateNotification, Notification},
};
use kernel::repository::notification::NotificationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    db: ConnectionPool,
}

const NOTIFICATION_COLUMNS: &str = r#"
    notification_id,
    user_id,
    actor_id,
    kind,
    title,
    message,
    data,
    read,
    created_at,
    updated_at
"#;

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn create(&self, event: CreateNotification) -> AppResult<Notification> {
        let row: NotificationRow = sqlx::query_as(&format!(
            r#"
                INSERT INTO notifications
                (notification_id, user_id, actor_id, kind, title, message, data)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(NotificationId::new())
        .bind(event.user_id)
        .bind(event.actor_id)
        .bind(event.kind)
        .bind(event.title)
        .bind(event.message)
        .bind(event.data)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        let rows: Vec<NotificationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {NOTIFICATION_COLUMNS}
                FROM notifications
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT 50
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    async fn mark_as_read(
        &self,
        notification_id: NotificationId,
        user_id: UserId,
    ) -> AppResult<Notification> {
        // Scoping by user_id keeps one user from touching another's inbox.
        let row: Option<NotificationRow> = sqlx::query_as(&format!(
            r#"
                UPDATE notifications
                SET read = TRUE
                WHERE notification_id = $1 AND user_id = $2
                RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(notification_id)
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Ok(row.into()),
            None => Err(AppError::EntityNotFound(format!(
                "notification ({notification_id}) not found"
            ))),
        }
    }

    async fn mark_all_as_read(&self, user_id: UserId) -> AppResult<u64> {
        let res = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE user_id = $1 AND read = FALSE",
        )
        .bind(user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;

    #[sqlx::test(migrations = "../migrations")]
    async fn inbox_is_scoped_per_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let alice = fixtures::seed_user(&pool, "alice@vertika.mx").await?;
        let bruno = fixtures::seed_user(&pool, "bruno@vertika.mx").await?;

        let repo = NotificationRepositoryImpl::new(pool);
        let created = repo
            .create(CreateNotification::new(
                alice,
                Some(bruno),
                "reservation_created".into(),
                Some("New reservation".into()),
                "Bruno booked your experience".into(),
                Some(serde_json::json!({ "seats": 2 })),
            ))
            .await?;
        assert!(!created.read);

        let inbox = repo.find_by_user_id(alice).await?;
        assert_eq!(inbox.len(), 1);
        assert!(repo.find_by_user_id(bruno).await?.is_empty());

        // Bruno cannot read Alice's notification.
        let res = repo.mark_as_read(created.notification_id, bruno).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let read = repo.mark_as_read(created.notification_id, alice).await?;
        assert!(read.read);

        // Already read, so a sweep flips nothing.
        assert_eq!(repo.mark_all_as_read(alice).await?, 0);

        Ok(())
    }
}
