use crate::dtos::{AddFavoriteRequest, FavoriteListResponse, FavoriteSetResponse};
use crate::middleware::UserId;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, request))]
pub async fn add_favorite(
    State(state): State<AppState>,
    user_id: UserId,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteSetResponse>), AppError> {
    request.validate()?;

    // Existence check and write are separate calls; concurrent adds for the
    // same user/recipe can both pass the check.
    if state
        .favorites
        .is_favorited(&user_id.0, &request.recipe_id)
        .await?
    {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Recipe is already in favorites"
        )));
    }

    let set = state
        .favorites
        .add_favorite(&user_id.0, &request.recipe_id)
        .await?;

    metrics::counter!("favorites_added_total").increment(1);
    tracing::info!(
        user_id = %user_id.0,
        recipe_id = %request.recipe_id,
        "Favorite recipe added"
    );

    Ok((StatusCode::CREATED, Json(FavoriteSetResponse::from(set))))
}

#[tracing::instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    user_id: UserId,
) -> Result<Json<FavoriteListResponse>, AppError> {
    let recipe_ids = state.favorites.list_favorite_ids(&user_id.0).await?;

    Ok(Json(FavoriteListResponse { recipe_ids }))
}

#[tracing::instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    user_id: UserId,
    Path(recipe_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let found = state
        .favorites
        .remove_favorite(&user_id.0, &recipe_id)
        .await?;

    if !found {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No favorites recorded for user"
        )));
    }

    metrics::counter!("favorites_removed_total").increment(1);
    tracing::info!(
        user_id = %user_id.0,
        recipe_id = %recipe_id,
        "Favorite recipe removed"
    );

    Ok(Json(json!({ "message": "Favorite recipe removed" })))
}
