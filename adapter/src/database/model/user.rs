use crate::database::model::experience::parse_enum;
use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub email_verified: bool,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            name,
            email,
            roles,
            email_verified,
        } = value;
        let roles = roles
            .iter()
            .map(|r| parse_enum::<Role>(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(User {
            user_id,
            name,
            email,
            roles,
            email_verified,
        })
    }
}
