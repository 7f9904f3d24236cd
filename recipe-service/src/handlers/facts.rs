use crate::models::Fact;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFactRequest {
    #[validate(length(min = 1, message = "quote cannot be empty"))]
    pub quote: String,
}

#[derive(Debug, Serialize)]
pub struct FactResponse {
    pub id: Option<String>,
    pub quote: String,
}

impl From<Fact> for FactResponse {
    fn from(fact: Fact) -> Self {
        Self {
            id: fact.id.map(|oid| oid.to_hex()),
            quote: fact.quote,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FactListResponse {
    pub facts: Vec<FactResponse>,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_fact(
    State(state): State<AppState>,
    Json(request): Json<CreateFactRequest>,
) -> Result<(StatusCode, Json<FactResponse>), AppError> {
    request.validate()?;

    let fact = state.facts.create_fact(&request.quote).await?;

    metrics::counter!("facts_created_total").increment(1);
    tracing::info!("Fact created");

    Ok((StatusCode::CREATED, Json(FactResponse::from(fact))))
}

#[tracing::instrument(skip(state))]
pub async fn list_facts(
    State(state): State<AppState>,
) -> Result<Json<FactListResponse>, AppError> {
    let facts = state.facts.list_facts().await?;

    Ok(Json(FactListResponse {
        facts: facts.into_iter().map(FactResponse::from).collect(),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn random_fact(State(state): State<AppState>) -> Result<Json<FactResponse>, AppError> {
    let fact = state
        .facts
        .random_fact()
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No facts available")))?;

    Ok(Json(FactResponse::from(fact)))
}
