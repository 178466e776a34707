use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::AppError,
    search::filter,
    state::AppState,
    store::{self, Animal},
};

#[derive(Deserialize)]
pub struct SearchParams {
    search: Option<String>,
}

pub async fn animals_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Animal>>, AppError> {
    let animals = store::load(&state.config.database_path).await?;
    let found = filter(animals, params.search.as_deref());

    info!("Request received: {}", params.search.as_deref().unwrap_or("all"));
    info!("Animals found: {}", found.len());

    Ok(Json(found))
}
