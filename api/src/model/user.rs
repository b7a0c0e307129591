use kernel::model::{id::UserId, role::Role, user::User};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub email_verified: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            roles,
            email_verified,
        } = value;
        Self {
            user_id,
            name,
            email,
            roles,
            email_verified,
        }
    }
}
