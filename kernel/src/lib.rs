pub mod channel;
pub mod mailer;
pub mod model;
pub mod repository;
