use crate::{
    extractor::AuthorizedUser,
    model::{
        auth::{
            AccessTokenResponse, LoginRequest, RegisterRequest, RegisterResponse,
            VerifyEmailRequest,
        },
        user::UserResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::{
    mailer::MailRecipient,
    model::{auth::event::CreateToken, user::event::CreateUser},
};
use registry::AppRegistry;
use shared::error::AppResult;
use uuid::Uuid;

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    req.validate()?;

    let verification_token = Uuid::new_v4().simple().to_string();
    let recipient = MailRecipient::new(req.name.clone(), req.email.clone());

    let user_id = registry
        .user_repository()
        .create(CreateUser::new(
            req.name,
            req.email,
            req.password,
            verification_token.clone(),
        ))
        .await?;

    if let Err(e) = registry
        .mailer()
        .send_verification_email(&recipient, &verification_token)
        .await
    {
        tracing::warn!(error = %e, %user_id, "failed to send verification email");
    }

    Ok((StatusCode::CREATED, Json(RegisterResponse { user_id })))
}

pub async fn verify_email(
    State(registry): State<AppRegistry>,
    Json(req): Json<VerifyEmailRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;
    registry.user_repository().verify_email(&req.token).await?;
    Ok(StatusCode::OK)
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate()?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.email, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;

    Ok(Json(AccessTokenResponse {
        user_id,
        access_token: access_token.0,
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}
