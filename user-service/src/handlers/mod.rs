pub mod favorites;
pub mod health;
pub mod viewed;

pub use favorites::{add_favorite, list_favorites, remove_favorite};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use viewed::{list_viewed, record_view};
