//! # Store
//!
//! Read path over the flat animal database file.
//!
//! The file is a JSON array of records, each with at least a `name`
//! and optionally a `description` and an `image` URI. It is read and
//! parsed fresh on every query; there is no cache and no file watch,
//! so two requests may observe different snapshots if the file changes
//! in between. The server never writes to it.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::AppError;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Animal {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub async fn load(path: &Path) -> Result<Vec<Animal>, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read {}: {e}", path.display());
        AppError::StoreUnavailable(e)
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        error!("Failed to parse {}: {e}", path.display());
        AppError::MalformedData(e)
    })
}
