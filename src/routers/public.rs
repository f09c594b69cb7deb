use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::{BoxError, Json};
use axum::{Router, routing::get};
use crate::controllers::catalog::get_catalog;
use crate::server::AppState;
use crate::types::response::ErrorResponse;
use crate::utilities::api_messages::APIMessages;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api
pub async fn get_public_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    return Router::new()
        .route(
            "/catalog",
            get({
                let app_state = Arc::clone(&app_state);
                move || get_catalog(app_state)
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse::new(
                            format!("Unhandled error: {}", err),
                            APIMessages::InternalServerError.to_string(),
                        )),
                    )
                }))
                .layer(BufferLayer::new(256))
                .layer(RateLimitLayer::new(120, Duration::from_secs(60))),
        );
}
