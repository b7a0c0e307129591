pub mod auth;
pub mod experience;
pub mod guide;
pub mod health;
pub mod notification;
pub mod reservation;
pub mod review;
