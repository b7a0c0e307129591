pub mod channel;
pub mod database;
pub mod mailer;
pub mod redis;
pub mod repository;
