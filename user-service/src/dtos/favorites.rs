use crate::models::FavoriteSet;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AddFavoriteRequest {
    #[validate(length(min = 1, message = "recipe_id cannot be empty"))]
    pub recipe_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteSetResponse {
    pub user_id: String,
    pub favorite_recipes: Vec<String>,
}

impl From<FavoriteSet> for FavoriteSetResponse {
    fn from(set: FavoriteSet) -> Self {
        Self {
            user_id: set.user_id,
            favorite_recipes: set.favorite_recipes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteListResponse {
    pub recipe_ids: Vec<String>,
}
