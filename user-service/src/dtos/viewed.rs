use crate::models::ViewedEntry;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RecordViewRequest {
    #[validate(length(min = 1, message = "recipe_id cannot be empty"))]
    pub recipe_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewedEntryResponse {
    pub recipe_id: String,
    pub viewed_at: String,
}

impl From<ViewedEntry> for ViewedEntryResponse {
    fn from(entry: ViewedEntry) -> Self {
        Self {
            recipe_id: entry.recipe_id,
            viewed_at: entry.viewed_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewedListResponse {
    pub viewed_recipes: Vec<ViewedEntryResponse>,
}
