use super::{
    auth::build_auth_routers, experience::build_experience_routers, guide::build_guide_routers,
    health::build_health_check_routers, notification::build_notification_routers,
    reservation::build_reservation_routers, review::build_review_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_experience_routers())
        .merge(build_reservation_routers())
        .merge(build_guide_routers())
        .merge(build_review_routers())
        .merge(build_notification_routers());
    Router::new().nest("/api/v1", router)
}
