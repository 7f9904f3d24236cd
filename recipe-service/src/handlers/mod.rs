pub mod facts;
pub mod health;

pub use facts::{create_fact, list_facts, random_fact};
pub use health::{health_check, metrics_endpoint, readiness_check};
