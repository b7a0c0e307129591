use crate::handler::guide::{register_guide, show_guide, show_guide_by_user_id, show_guide_list};
use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

pub fn build_guide_routers() -> Router<AppRegistry> {
    let guide_routers = Router::new()
        .route("/", post(register_guide))
        .route("/", get(show_guide_list))
        .route("/:guide_id", get(show_guide))
        .route("/user/:user_id", get(show_guide_by_user_id));

    Router::new().nest("/guides", guide_routers)
}
