use crate::{
    extractor::AuthorizedUser,
    model::review::{CreateReviewRequest, CreateReviewResponse, ReviewsResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::ExperienceId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn create_review(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<CreateReviewResponse>)> {
    req.validate()?;

    let review_id = registry
        .review_repository()
        .create(req.into_event(user.id()))
        .await?;

    Ok((StatusCode::CREATED, Json(CreateReviewResponse { review_id })))
}

pub async fn show_reviews_by_experience_id(
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    registry
        .review_repository()
        .find_by_experience_id(experience_id)
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}
