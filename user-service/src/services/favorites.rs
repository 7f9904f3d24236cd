use crate::models::FavoriteSet;
use crate::services::UserDb;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use service_core::error::AppError;

/// Data access for the user-to-favorite-recipes association.
///
/// Each operation is a single find/insert/update against the
/// `user_favorite_recipes` collection. The existence check and the write are
/// deliberately separate, composable operations: `add_favorite` does not
/// deduplicate, so callers must consult `is_favorited` first. Concurrent
/// requests for the same user can interleave between the two calls; only
/// single-document updates are atomic.
#[derive(Clone)]
pub struct FavoritesService {
    db: UserDb,
}

impl FavoritesService {
    pub fn new(db: UserDb) -> Self {
        Self { db }
    }

    /// Add a recipe to the user's favorites, creating the favorites document
    /// on first use. Returns the persisted record.
    pub async fn add_favorite(
        &self,
        user_id: &str,
        recipe_id: &str,
    ) -> Result<FavoriteSet, AppError> {
        let favorites = self.db.favorites();

        let existing = favorites
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(AppError::from)?;

        match existing {
            None => {
                let mut set = FavoriteSet::new(user_id.to_string(), recipe_id.to_string());
                let result = favorites.insert_one(&set, None).await.map_err(|e| {
                    tracing::error!(user_id = %user_id, "Failed to insert favorite set: {}", e);
                    AppError::from(e)
                })?;
                set.id = result.inserted_id.as_object_id();
                Ok(set)
            }
            Some(_) => {
                let options = FindOneAndUpdateOptions::builder()
                    .return_document(ReturnDocument::After)
                    .build();

                favorites
                    .find_one_and_update(
                        doc! { "user_id": user_id },
                        doc! { "$push": { "favorite_recipes": recipe_id } },
                        options,
                    )
                    .await
                    .map_err(|e| {
                        tracing::error!(user_id = %user_id, "Failed to push favorite: {}", e);
                        AppError::from(e)
                    })?
                    .ok_or_else(|| {
                        AppError::DatabaseError(anyhow::anyhow!(
                            "Favorite set for user {} disappeared during update",
                            user_id
                        ))
                    })
            }
        }
    }

    /// Whether the recipe is already in the user's favorites. False when the
    /// user has no favorites document yet.
    pub async fn is_favorited(&self, user_id: &str, recipe_id: &str) -> Result<bool, AppError> {
        let set = self
            .db
            .favorites()
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(AppError::from)?;

        Ok(set.is_some_and(|s| s.favorite_recipes.iter().any(|id| id == recipe_id)))
    }

    /// All favorited recipe ids for the user, in insertion order. Empty when
    /// no document exists.
    pub async fn list_favorite_ids(&self, user_id: &str) -> Result<Vec<String>, AppError> {
        let set = self
            .db
            .favorites()
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(AppError::from)?;

        Ok(set.map(|s| s.favorite_recipes).unwrap_or_default())
    }

    /// Pull the recipe from the user's favorites. Returns whether a favorites
    /// document was found for the user — true even when the recipe id was
    /// already absent from it, since the update targets the record, not the
    /// element.
    pub async fn remove_favorite(&self, user_id: &str, recipe_id: &str) -> Result<bool, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .db
            .favorites()
            .find_one_and_update(
                doc! { "user_id": user_id },
                doc! { "$pull": { "favorite_recipes": recipe_id } },
                options,
            )
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user_id, "Failed to pull favorite: {}", e);
                AppError::from(e)
            })?;

        Ok(updated.is_some())
    }
}
