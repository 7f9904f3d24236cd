pub mod database;
pub mod favorites;
pub mod metrics;
pub mod viewed;

pub use database::UserDb;
pub use favorites::FavoritesService;
pub use metrics::{get_metrics, init_metrics};
pub use viewed::ViewedRecipesService;
