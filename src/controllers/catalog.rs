use crate::server::AppState;
use crate::types::response::GenericResponse;
use crate::utilities::api_messages::{APIMessages, CatalogMessages};
use axum::{http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

pub async fn get_catalog(state: Arc<AppState>) -> (StatusCode, Json<GenericResponse>) {
    let data = match serde_json::to_value(state.catalog.as_ref()) {
        Ok(data) => data,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenericResponse {
                    message: APIMessages::InternalServerError.to_string(),
                    data: json!({}),
                    exit_code: 1,
                }),
            )
        }
    };

    (
        StatusCode::OK,
        Json(GenericResponse {
            message: APIMessages::Catalog(CatalogMessages::Found).to_string(),
            data,
            exit_code: 0,
        }),
    )
}
