use crate::handler::notification::{
    mark_all_as_read, mark_as_read, show_notifications, stream_notifications,
};
use axum::{
    routing::{get, patch},
    Router,
};
use registry::AppRegistry;

pub fn build_notification_routers() -> Router<AppRegistry> {
    let notification_routers = Router::new()
        .route("/user/:user_id", get(show_notifications))
        .route("/user/:user_id/stream", get(stream_notifications))
        .route("/user/:user_id/read-all", patch(mark_all_as_read))
        .route("/:notification_id/read", patch(mark_as_read));

    Router::new().nest("/notifications", notification_routers)
}
