use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load the animal database")]
    StoreUnavailable(#[source] std::io::Error),

    #[error("Animal database is not valid JSON")]
    MalformedData(#[source] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
