use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A food fact. Quotes are unique across the collection (unique index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub quote: String,
}

impl Fact {
    pub fn new(quote: String) -> Self {
        Self { id: None, quote }
    }
}
