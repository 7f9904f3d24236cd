use crate::dtos::{RecordViewRequest, ViewedEntryResponse, ViewedListResponse};
use crate::middleware::UserId;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use service_core::error::AppError;
use validator::Validate;

/// Record a view event.
///
/// First view of a recipe appends an entry (201); a re-view refreshes the
/// existing entry's timestamp in place (200). The check and the write are
/// two separate store operations, so concurrent re-views of the same
/// user/recipe pair can race; last write wins on the timestamp.
#[tracing::instrument(skip(state, request))]
pub async fn record_view(
    State(state): State<AppState>,
    user_id: UserId,
    Json(request): Json<RecordViewRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    request.validate()?;

    if state
        .viewed
        .has_been_viewed(&user_id.0, &request.recipe_id)
        .await?
    {
        state
            .viewed
            .touch_view(&user_id.0, &request.recipe_id)
            .await?;

        metrics::counter!("views_touched_total").increment(1);
        tracing::info!(
            user_id = %user_id.0,
            recipe_id = %request.recipe_id,
            "View time updated"
        );

        Ok((
            StatusCode::OK,
            Json(json!({ "message": "Updated view time for recipe" })),
        ))
    } else {
        state
            .viewed
            .record_view(&user_id.0, &request.recipe_id)
            .await?;

        metrics::counter!("views_recorded_total").increment(1);
        tracing::info!(
            user_id = %user_id.0,
            recipe_id = %request.recipe_id,
            "New viewed recipe added"
        );

        Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "Added new viewed recipe" })),
        ))
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_viewed(
    State(state): State<AppState>,
    user_id: UserId,
) -> Result<Json<ViewedListResponse>, AppError> {
    let entries = state.viewed.list_viewed(&user_id.0).await?;

    Ok(Json(ViewedListResponse {
        viewed_recipes: entries.into_iter().map(ViewedEntryResponse::from).collect(),
    }))
}
