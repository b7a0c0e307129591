use crate::{
    extractor::AuthorizedUser,
    model::guide::{CreateGuideRequest, CreateGuideResponse, GuideResponse, GuidesResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{GuideId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_guide(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateGuideRequest>,
) -> AppResult<(StatusCode, Json<CreateGuideResponse>)> {
    req.validate()?;

    if !user.user.email_verified {
        return Err(AppError::ForbiddenOperation(
            "verify your email before requesting a guide profile".into(),
        ));
    }

    let guide_id = registry
        .guide_repository()
        .create(req.into_event(user.id()))
        .await?;

    Ok((StatusCode::CREATED, Json(CreateGuideResponse { guide_id })))
}

pub async fn show_guide(
    _user: AuthorizedUser,
    Path(guide_id): Path<GuideId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuideResponse>> {
    registry
        .guide_repository()
        .find_by_id(guide_id)
        .await?
        .map(GuideResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound(format!("guide ({guide_id}) not found")))
}

pub async fn show_guide_by_user_id(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuideResponse>> {
    registry
        .guide_repository()
        .find_by_user_id(user_id)
        .await?
        .map(GuideResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound(format!("no guide profile for user ({user_id})")))
}

pub async fn show_guide_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GuidesResponse>> {
    registry
        .guide_repository()
        .find_all()
        .await
        .map(GuidesResponse::from)
        .map(Json)
}
