use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single viewed-recipe entry: which recipe, and when it was last viewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewedEntry {
    pub recipe_id: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub viewed_at: DateTime<Utc>,
}

impl ViewedEntry {
    pub fn now(recipe_id: String) -> Self {
        Self {
            recipe_id,
            viewed_at: Utc::now(),
        }
    }
}

/// Per-user view history.
///
/// One document per user (unique index on `user_id`); `recipe_id` is unique
/// across entries of a document. Re-viewing a recipe refreshes its entry's
/// timestamp via `ViewedRecipesService::touch_view` rather than appending a
/// duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewHistory {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub viewed_recipes: Vec<ViewedEntry>,
}

impl ViewHistory {
    pub fn new(user_id: String, recipe_id: String) -> Self {
        Self {
            id: None,
            user_id,
            viewed_recipes: vec![ViewedEntry::now(recipe_id)],
        }
    }
}
