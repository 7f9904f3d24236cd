use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Per-user record of favorited recipe identifiers.
///
/// One document per user (unique index on `user_id`). Insertion order of
/// `favorite_recipes` is preserved. The storage layer does not deduplicate;
/// callers check membership via `FavoritesService::is_favorited` before
/// adding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteSet {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub favorite_recipes: Vec<String>,
}

impl FavoriteSet {
    pub fn new(user_id: String, recipe_id: String) -> Self {
        Self {
            id: None,
            user_id,
            favorite_recipes: vec![recipe_id],
        }
    }
}
