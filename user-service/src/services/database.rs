use crate::models::{FavoriteSet, ViewHistory};
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct UserDb {
    client: MongoClient,
    db: Database,
}

impl UserDb {
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
        tracing::info!("Creating MongoDB indexes for user-service");

        // At most one favorites document per user
        let favorites_user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_id_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.favorites()
            .create_index(favorites_user_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create user_id index on user_favorite_recipes: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on user_favorite_recipes.user_id");

        // At most one view-history document per user
        let viewed_user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_id_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.view_histories()
            .create_index(viewed_user_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create user_id index on user_viewed_recipes: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on user_viewed_recipes.user_id");

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

    pub fn favorites(&self) -> Collection<FavoriteSet> {
        self.db.collection("user_favorite_recipes")
    }

    pub fn view_histories(&self) -> Collection<ViewHistory> {
        self.db.collection("user_viewed_recipes")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
