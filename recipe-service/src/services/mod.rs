pub mod database;
pub mod facts;
pub mod metrics;

pub use database::RecipeDb;
pub use facts::FactsService;
pub use metrics::{get_metrics, init_metrics};
