pub mod event;

/// Opaque bearer token mapped to a user id in the key-value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
