use crate::handler::experience::{
    archive_experience, complete_experience, delete_experience, progress_experience,
    publish_experience, register_experience, republish_experience, show_experience,
    show_experience_list, update_experience,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

pub fn build_experience_routers() -> Router<AppRegistry> {
    let experience_routers = Router::new()
        .route("/", post(register_experience))
        .route("/", get(show_experience_list))
        .route("/:experience_id", get(show_experience))
        .route("/:experience_id", patch(update_experience))
        .route("/:experience_id", delete(delete_experience))
        .route("/:experience_id/publish", patch(publish_experience))
        .route("/:experience_id/archive", patch(archive_experience))
        .route("/:experience_id/progress", patch(progress_experience))
        .route("/:experience_id/complete", patch(complete_experience))
        .route("/:experience_id/republish", post(republish_experience));

    Router::new().nest("/experiences", experience_routers)
}
