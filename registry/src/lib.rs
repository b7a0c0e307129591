use adapter::{
    database::ConnectionPool,
    redis::RedisClient,
    repository::{
        auth::AuthRepositoryImpl, experience::ExperienceRepositoryImpl,
        guide::GuideRepositoryImpl, health::HealthCheckRepositoryImpl,
        notification::NotificationRepositoryImpl, reservation::ReservationRepositoryImpl,
        review::ReviewRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::{
    channel::RealtimeChannel,
    mailer::Mailer,
    repository::{
        auth::AuthRepository, experience::ExperienceRepository, guide::GuideRepository,
        health::HealthCheckRepository, notification::NotificationRepository,
        reservation::ReservationRepository, review::ReviewRepository, user::UserRepository,
    },
};
use shared::config::AppConfig;
use std::sync::Arc;

/// Dependency container handed to every handler through axum state.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    experience_repository: Arc<dyn ExperienceRepository>,
    guide_repository: Arc<dyn GuideRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    mailer: Arc<dyn Mailer>,
    channel: Arc<dyn RealtimeChannel>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        kv: Arc<RedisClient>,
        mailer: Arc<dyn Mailer>,
        channel: Arc<dyn RealtimeChannel>,
        app_config: AppConfig,
    ) -> Self {
        Self {
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            experience_repository: Arc::new(ExperienceRepositoryImpl::new(pool.clone())),
            guide_repository: Arc::new(GuideRepositoryImpl::new(pool.clone())),
            reservation_repository: Arc::new(ReservationRepositoryImpl::new(pool.clone())),
            review_repository: Arc::new(ReviewRepositoryImpl::new(pool.clone())),
            notification_repository: Arc::new(NotificationRepositoryImpl::new(pool.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(pool.clone())),
            auth_repository: Arc::new(AuthRepositoryImpl::new(
                pool,
                kv,
                app_config.auth.ttl,
            )),
            mailer,
            channel,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn experience_repository(&self) -> Arc<dyn ExperienceRepository> {
        self.experience_repository.clone()
    }

    pub fn guide_repository(&self) -> Arc<dyn GuideRepository> {
        self.guide_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn mailer(&self) -> Arc<dyn Mailer> {
        self.mailer.clone()
    }

    pub fn channel(&self) -> Arc<dyn RealtimeChannel> {
        self.channel.clone()
    }
}
