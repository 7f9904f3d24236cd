use crate::models::{ViewHistory, ViewedEntry};
use crate::services::UserDb;
use mongodb::bson::{doc, DateTime as BsonDateTime};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use service_core::error::AppError;

/// Data access for the user-to-viewed-recipes association.
///
/// `record_view` only creates or appends entries; refreshing the timestamp
/// of an already-viewed recipe is `touch_view`'s job. The composing
/// controller checks `has_been_viewed` and picks one of the two — the
/// check and the write are not atomic across requests for the same user.
#[derive(Clone)]
pub struct ViewedRecipesService {
    db: UserDb,
}

impl ViewedRecipesService {
    pub fn new(db: UserDb) -> Self {
        Self { db }
    }

    /// Record a first view of a recipe, creating the history document on
    /// first use. Appends unconditionally; callers use `has_been_viewed` to
    /// decide between this and `touch_view`. Returns the persisted record.
    pub async fn record_view(
        &self,
        user_id: &str,
        recipe_id: &str,
    ) -> Result<ViewHistory, AppError> {
        let histories = self.db.view_histories();

        let existing = histories
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(AppError::from)?;

        match existing {
            None => {
                let mut history = ViewHistory::new(user_id.to_string(), recipe_id.to_string());
                let result = histories.insert_one(&history, None).await.map_err(|e| {
                    tracing::error!(user_id = %user_id, "Failed to insert view history: {}", e);
                    AppError::from(e)
                })?;
                history.id = result.inserted_id.as_object_id();
                Ok(history)
            }
            Some(_) => {
                let entry = ViewedEntry::now(recipe_id.to_string());
                let entry_bson = mongodb::bson::to_bson(&entry).map_err(|e| {
                    AppError::InternalError(anyhow::anyhow!(
                        "Failed to serialize viewed entry: {}",
                        e
                    ))
                })?;

                let options = FindOneAndUpdateOptions::builder()
                    .return_document(ReturnDocument::After)
                    .build();

                histories
                    .find_one_and_update(
                        doc! { "user_id": user_id },
                        doc! { "$push": { "viewed_recipes": entry_bson } },
                        options,
                    )
                    .await
                    .map_err(|e| {
                        tracing::error!(user_id = %user_id, "Failed to push viewed entry: {}", e);
                        AppError::from(e)
                    })?
                    .ok_or_else(|| {
                        AppError::DatabaseError(anyhow::anyhow!(
                            "View history for user {} disappeared during update",
                            user_id
                        ))
                    })
            }
        }
    }

    /// Whether the user has any entry for the recipe. False when the user
    /// has no history document yet.
    pub async fn has_been_viewed(&self, user_id: &str, recipe_id: &str) -> Result<bool, AppError> {
        let history = self
            .db
            .view_histories()
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(AppError::from)?;

        Ok(history.is_some_and(|h| h.viewed_recipes.iter().any(|e| e.recipe_id == recipe_id)))
    }

    /// All viewed entries for the user, most recently viewed first. Empty
    /// when no document exists.
    pub async fn list_viewed(&self, user_id: &str) -> Result<Vec<ViewedEntry>, AppError> {
        let history = self
            .db
            .view_histories()
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(AppError::from)?;

        let mut entries = history.map(|h| h.viewed_recipes).unwrap_or_default();
        entries.sort_by(|a, b| b.viewed_at.cmp(&a.viewed_at));
        Ok(entries)
    }

    /// Refresh the matched entry's timestamp in place. Silently does nothing
    /// when no user/recipe pair matches; never creates documents or entries.
    pub async fn touch_view(&self, user_id: &str, recipe_id: &str) -> Result<(), AppError> {
        let result = self
            .db
            .view_histories()
            .update_one(
                doc! { "user_id": user_id, "viewed_recipes.recipe_id": recipe_id },
                doc! { "$set": { "viewed_recipes.$.viewed_at": BsonDateTime::now() } },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user_id, "Failed to touch viewed entry: {}", e);
                AppError::from(e)
            })?;

        if result.matched_count == 0 {
            tracing::debug!(
                user_id = %user_id,
                recipe_id = %recipe_id,
                "No viewed entry to touch"
            );
        }

        Ok(())
    }
}
