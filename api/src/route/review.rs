use crate::handler::review::{create_review, show_reviews_by_experience_id};
use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

pub fn build_review_routers() -> Router<AppRegistry> {
    let review_routers = Router::new()
        .route("/", post(create_review))
        .route("/experience/:experience_id", get(show_reviews_by_experience_id));

    Router::new().nest("/reviews", review_routers)
}
