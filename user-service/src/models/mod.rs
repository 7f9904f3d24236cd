pub mod favorites;
pub mod viewed;

pub use favorites::FavoriteSet;
pub use viewed::{ViewHistory, ViewedEntry};
