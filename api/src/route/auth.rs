use crate::handler::auth::{login, logout, me, register, verify_email};
use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

pub fn build_auth_routers() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/register", post(register))
        .route("/verify-email", post(verify_email))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me));

    Router::new().nest("/auth", auth_routers)
}
