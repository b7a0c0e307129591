pub mod auth;
pub mod experience;
pub mod guide;
pub mod id;
pub mod notification;
pub mod reservation;
pub mod review;
pub mod role;
pub mod user;
