pub mod favorites;
pub mod viewed;

pub use favorites::{AddFavoriteRequest, FavoriteListResponse, FavoriteSetResponse};
pub use viewed::{RecordViewRequest, ViewedEntryResponse, ViewedListResponse};
