use crate::models::Fact;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct RecipeDb {
    client: MongoClient,
    db: Database,
}

impl RecipeDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for recipe-service");

        let quote_index = IndexModel::builder()
            .keys(doc! { "quote": 1 })
            .options(
                IndexOptions::builder()
                    .name("quote_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.facts()
            .create_index(quote_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create quote index on facts collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on facts.quote");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn facts(&self) -> Collection<Fact> {
        self.db.collection("facts")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
