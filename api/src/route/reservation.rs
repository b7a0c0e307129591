use crate::handler::reservation::{
    cancel_reservation, create_reservation, delete_reservation, show_reservation,
    show_reservation_list, show_reservations_by_user_id, update_reservation,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(create_reservation))
        .route("/", get(show_reservation_list))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", patch(update_reservation))
        .route("/:reservation_id", delete(delete_reservation))
        .route("/:reservation_id/cancel", patch(cancel_reservation))
        .route("/user/:user_id", get(show_reservations_by_user_id));

    Router::new().nest("/reservations", reservation_routers)
}
