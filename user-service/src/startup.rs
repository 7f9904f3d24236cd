//! Application startup and lifecycle management.

use crate::config::UserConfig;
use crate::handlers;
use crate::services::{FavoritesService, UserDb, ViewedRecipesService};
use axum::{
    routing::{delete, get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The association services receive the store handle at construction;
/// nothing reaches a process-global connection.
#[derive(Clone)]
pub struct AppState {
    pub config: UserConfig,
    pub db: UserDb,
    pub favorites: FavoritesService,
    pub viewed: ViewedRecipesService,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: UserConfig) -> Result<Self, AppError> {
        let db = UserDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let favorites = FavoritesService::new(db.clone());
        let viewed = ViewedRecipesService::new(db.clone());

        let state = AppState {
            config: config.clone(),
            db,
            favorites,
            viewed,
        };

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("user-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &UserDb {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route(
                "/favorites",
                post(handlers::add_favorite).get(handlers::list_favorites),
            )
            .route("/favorites/:recipe_id", delete(handlers::remove_favorite))
            .route(
                "/viewed",
                post(handlers::record_view).get(handlers::list_viewed),
            )
            .layer(axum::middleware::from_fn(
                service_core::middleware::metrics_middleware,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        axum::serve(self.listener, app).await
    }
}
