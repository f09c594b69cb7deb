use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{BoxError, Json};
use axum::{Router, routing::post};
use crate::controllers::orders::create_order;
use crate::server::AppState;
use crate::types::order::OrderDraft;
use crate::types::response::ErrorResponse;
use crate::utilities::api_messages::APIMessages;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api/orders
pub async fn get_orders_router(app_state: Arc<AppState>, orders_per_minute: u64) -> Router<Arc<AppState>> {
    return Router::new()
        .route(
            "/",
            post({
                let app_state = Arc::clone(&app_state);
                move |payload: Result<Json<OrderDraft>, JsonRejection>| create_order(payload, app_state)
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
                .layer(BufferLayer::new(64))
                .layer(RateLimitLayer::new(orders_per_minute, Duration::from_secs(60))),
        );
}
