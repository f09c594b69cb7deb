use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::BoxError;
use axum::{Router, routing::{get, post}};
use axum_extra::extract::Form;
use crate::controllers::pages::{landing_page, order_page, submit_order_page};
use crate::server::AppState;
use crate::types::order::OrderFormFields;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /
pub async fn get_pages_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    return Router::new()
        .route(
            "/",
            get({
                let app_state = Arc::clone(&app_state);
                move || landing_page(app_state)
            }),
        )
        .route(
            "/order",
            get({
                let app_state = Arc::clone(&app_state);
                move || order_page(app_state)
            }),
        );
}

// POST /order, limited like /api/orders
pub async fn get_order_form_router(app_state: Arc<AppState>, orders_per_minute: u64) -> Router<Arc<AppState>> {
    return Router::new()
        .route(
            "/order",
            post({
                let app_state = Arc::clone(&app_state);
                move |fields: Form<OrderFormFields>| submit_order_page(fields, app_state)
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled error: {}", err),
                    )
                }))
                .layer(BufferLayer::new(64))
                .layer(RateLimitLayer::new(orders_per_minute, Duration::from_secs(60))),
        );
}
