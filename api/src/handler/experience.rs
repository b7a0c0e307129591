use crate::{
    extractor::AuthorizedUser,
    model::experience::{
        CreateExperienceRequest, CreateExperienceResponse, ExperienceListQuery,
        ExperienceResponse, ExperiencesResponse, UpdateExperienceRequest,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::{
    mailer::MailRecipient,
    model::{
        experience::{
            event::{DeleteExperience, RepublishExperience, UpdateExperienceStatus},
            ExperienceStatus,
        },
        guide::Guide,
        id::ExperienceId,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Resolves the acting user's guide profile and requires it to be verified.
async fn require_verified_guide(
    registry: &AppRegistry,
    user: &AuthorizedUser,
) -> AppResult<Guide> {
    let guide = registry
        .guide_repository()
        .find_by_user_id(user.id())
        .await?
        .ok_or_else(|| AppError::EntityNotFound("no guide profile for this user".into()))?;
    if !guide.verified {
        return Err(AppError::ForbiddenOperation(
            "guide profile is not verified yet".into(),
        ));
    }
    Ok(guide)
}

pub async fn register_experience(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateExperienceRequest>,
) -> AppResult<(StatusCode, Json<CreateExperienceResponse>)> {
    req.validate()?;
    let guide = require_verified_guide(&registry, &user).await?;

    let experience_id = registry
        .experience_repository()
        .create(req.into_event(guide.guide_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateExperienceResponse { experience_id }),
    ))
}

pub async fn show_experience_list(
    Query(query): Query<ExperienceListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ExperiencesResponse>> {
    registry
        .experience_repository()
        .find_all(query.into())
        .await
        .map(ExperiencesResponse::from)
        .map(Json)
}

pub async fn show_experience(
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ExperienceResponse>> {
    registry
        .experience_repository()
        .find_by_id(experience_id)
        .await?
        .map(ExperienceResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound(format!("experience ({experience_id}) not found")))
}

pub async fn update_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateExperienceRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;
    require_verified_guide(&registry, &user).await?;

    registry
        .experience_repository()
        .update(req.into_event(experience_id, user.id()))
        .await?;
    Ok(StatusCode::OK)
}

pub async fn publish_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    transition(&registry, &user, experience_id, ExperienceStatus::Published).await
}

pub async fn archive_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    transition(&registry, &user, experience_id, ExperienceStatus::Archived).await
}

pub async fn progress_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    transition(&registry, &user, experience_id, ExperienceStatus::Progress).await
}

/// Completing an experience also closes out its reservations and asks every
/// customer for a review. The emails are best-effort; the transition never
/// waits on them.
pub async fn complete_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    transition(&registry, &user, experience_id, ExperienceStatus::Completed).await?;

    let reservations = registry
        .reservation_repository()
        .find_active_by_experience_id(experience_id)
        .await?;
    registry
        .reservation_repository()
        .complete_by_experience_id(experience_id)
        .await?;

    for reservation in reservations {
        let customer = match registry
            .user_repository()
            .find_by_id(reservation.reserved_by)
            .await
        {
            Ok(Some(customer)) => customer,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load customer for review request");
                continue;
            }
        };
        let recipient = MailRecipient::new(customer.name, customer.email);
        if let Err(e) = registry
            .mailer()
            .send_review_request(&recipient, &reservation.experience.title)
            .await
        {
            tracing::warn!(
                error = %e,
                reservation_id = %reservation.reservation_id,
                "failed to send review request email"
            );
        }
    }

    Ok(StatusCode::OK)
}

async fn transition(
    registry: &AppRegistry,
    user: &AuthorizedUser,
    experience_id: ExperienceId,
    status: ExperienceStatus,
) -> AppResult<StatusCode> {
    require_verified_guide(registry, user).await?;
    registry
        .experience_repository()
        .update_status(UpdateExperienceStatus::new(experience_id, status, user.id()))
        .await?;
    Ok(StatusCode::OK)
}

pub async fn republish_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<(StatusCode, Json<CreateExperienceResponse>)> {
    require_verified_guide(&registry, &user).await?;

    let experience_id = registry
        .experience_repository()
        .republish(RepublishExperience::new(experience_id, user.id()))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateExperienceResponse { experience_id }),
    ))
}

pub async fn delete_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    require_verified_guide(&registry, &user).await?;

    registry
        .experience_repository()
        .delete(DeleteExperience::new(experience_id, user.id()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::{
        channel::InProcessChannel,
        database::ConnectionPool,
        redis::RedisClient,
        repository::{
            experience::ExperienceRepositoryImpl, guide::GuideRepositoryImpl,
            reservation::ReservationRepositoryImpl, user::UserRepositoryImpl,
        },
    };
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use kernel::{
        mailer::{MailRecipient, Mailer, ReservationConfirmationMail},
        model::{
            auth::AccessToken,
            experience::{
                event::{CreateExperience, UpdateExperienceStatus},
                Activity, Currency, Difficulty,
            },
            guide::event::CreateGuide,
            reservation::event::{CancelReservation, CreateReservation},
            role::Role,
            user::{event::CreateUser, User},
        },
        repository::{
            experience::ExperienceRepository, guide::GuideRepository,
            reservation::ReservationRepository, user::UserRepository,
        },
    };
    use shared::config::{AppConfig, AuthConfig, DatabaseConfig, RedisConfig, SmtpConfig};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingMailer {
        review_requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send_reservation_confirmation(
            &self,
            _to: &MailRecipient,
            _mail: &ReservationConfirmationMail,
        ) -> AppResult<()> {
            Ok(())
        }

        async fn send_review_request(
            &self,
            to: &MailRecipient,
            _experience_title: &str,
        ) -> AppResult<()> {
            self.review_requests.lock().unwrap().push(to.email.clone());
            Ok(())
        }

        async fn send_verification_email(
            &self,
            _to: &MailRecipient,
            _token: &str,
        ) -> AppResult<()> {
            Ok(())
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            database: DatabaseConfig {
                host: "localhost".into(),
                port: 5432,
                username: "app".into(),
                password: "passwd".into(),
                database: "app".into(),
            },
            redis: RedisConfig {
                host: "localhost".into(),
                port: 6379,
            },
            auth: AuthConfig { ttl: 3600 },
            smtp: SmtpConfig {
                host: "localhost".into(),
                port: 587,
                username: "app".into(),
                password: "passwd".into(),
                from: "Vertika <no-reply@vertika.mx>".into(),
            },
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn completing_mails_one_review_request_per_active_reservation(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);

        let users = UserRepositoryImpl::new(pool.clone());
        let guide_user_id = users
            .create(CreateUser::new(
                "Guía".into(),
                "guide@vertika.mx".into(),
                "passw0rd1".into(),
                "t1".into(),
            ))
            .await?;
        let cancelled_customer = users
            .create(CreateUser::new(
                "Cancelled".into(),
                "cancelled@vertika.mx".into(),
                "passw0rd2".into(),
                "t2".into(),
            ))
            .await?;
        let active_customer = users
            .create(CreateUser::new(
                "Active".into(),
                "active@vertika.mx".into(),
                "passw0rd3".into(),
                "t3".into(),
            ))
            .await?;

        let guides = GuideRepositoryImpl::new(pool.clone());
        let guide_id = guides
            .create(CreateGuide::new(
                guide_user_id,
                "Alta montaña".into(),
                vec![],
                8,
                vec![],
                vec![],
            ))
            .await?;
        sqlx::query("UPDATE guides SET verified = TRUE WHERE guide_id = $1")
            .bind(guide_id)
            .execute(pool.inner_ref())
            .await?;

        let experiences = ExperienceRepositoryImpl::new(pool.clone());
        let experience_id = experiences
            .create(CreateExperience::new(
                guide_id,
                "Iztaccíhuatl".into(),
                "Ruta de las rodillas".into(),
                Activity::Alpinism,
                "Iztaccíhuatl".into(),
                Difficulty::Hard,
                Utc::now() + Duration::days(21),
                2,
                6,
                9000,
                Currency::Mxn,
                vec![],
            ))
            .await?;
        sqlx::query("UPDATE experiences SET status = 'published' WHERE experience_id = $1")
            .bind(experience_id)
            .execute(pool.inner_ref())
            .await?;

        // One cancelled reservation, one still confirmed.
        let reservations = ReservationRepositoryImpl::new(pool.clone());
        let first = reservations
            .create(CreateReservation::new(
                experience_id,
                cancelled_customer,
                2,
                18000,
            ))
            .await?;
        reservations
            .cancel(CancelReservation::new(
                first.reservation_id,
                cancelled_customer,
            ))
            .await?;
        reservations
            .create(CreateReservation::new(
                experience_id,
                active_customer,
                3,
                27000,
            ))
            .await?;

        experiences
            .update_status(UpdateExperienceStatus::new(
                experience_id,
                ExperienceStatus::Progress,
                guide_user_id,
            ))
            .await?;

        let mailer = Arc::new(RecordingMailer::default());
        let config = test_config();
        let kv = Arc::new(RedisClient::new(&config.redis)?);
        let registry = AppRegistry::new(
            pool,
            kv,
            mailer.clone(),
            Arc::new(InProcessChannel::new()),
            config,
        );

        let principal = AuthorizedUser {
            access_token: AccessToken("token".into()),
            user: User {
                user_id: guide_user_id,
                name: "Guía".into(),
                email: "guide@vertika.mx".into(),
                roles: vec![Role::Guide],
                email_verified: true,
            },
        };

        let status =
            complete_experience(principal, Path(experience_id), State(registry)).await?;
        assert_eq!(status, StatusCode::OK);

        let sent = mailer.review_requests.lock().unwrap();
        assert_eq!(*sent, vec!["active@vertika.mx".to_string()]);

        Ok(())
    }
}
