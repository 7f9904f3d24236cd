use crate::models::Fact;
use crate::services::RecipeDb;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use service_core::error::AppError;

/// Data access for the food-facts lookup table.
#[derive(Clone)]
pub struct FactsService {
    db: RecipeDb,
}

impl FactsService {
    pub fn new(db: RecipeDb) -> Self {
        Self { db }
    }

    /// Insert a new fact. The unique index on `quote` rejects duplicates,
    /// surfaced as a conflict.
    pub async fn create_fact(&self, quote: &str) -> Result<Fact, AppError> {
        let mut fact = Fact::new(quote.to_string());

        match self.db.facts().insert_one(&fact, None).await {
            Ok(result) => {
                fact.id = result.inserted_id.as_object_id();
                Ok(fact)
            }
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::Conflict(anyhow::anyhow!("Fact already exists")))
            }
            Err(e) => {
                tracing::error!("Failed to insert fact: {}", e);
                Err(AppError::from(e))
            }
        }
    }

    pub async fn list_facts(&self) -> Result<Vec<Fact>, AppError> {
        let cursor = self
            .db
            .facts()
            .find(doc! {}, None)
            .await
            .map_err(AppError::from)?;

        cursor.try_collect().await.map_err(AppError::from)
    }

    /// One uniformly random fact, or None when the collection is empty.
    pub async fn random_fact(&self) -> Result<Option<Fact>, AppError> {
        let pipeline = vec![doc! { "$sample": { "size": 1 } }];

        let mut cursor = self
            .db
            .facts()
            .aggregate(pipeline, None)
            .await
            .map_err(AppError::from)?;

        match cursor.try_next().await.map_err(AppError::from)? {
            Some(document) => {
                let fact = mongodb::bson::from_document(document).map_err(|e| {
                    AppError::InternalError(anyhow::anyhow!("Failed to deserialize fact: {}", e))
                })?;
                Ok(Some(fact))
            }
            None => Ok(None),
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}
