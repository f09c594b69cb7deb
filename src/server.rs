use crate::form::validation::ValidationPolicy;
use crate::routers::{
    orders::get_orders_router,
    pages::{get_order_form_router, get_pages_router},
    public::get_public_router,
};
use crate::storage::{log_sink::LogSink, webhook::WebhookSink, OrderSink, SinkError};
use crate::types::catalog::Catalog;
use crate::utilities::{config::Settings, helpers::fallback};
use axum::{http::Method, Router};
use log::info;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub policy: ValidationPolicy,
    pub owner_name: String,
    pub sink: Arc<dyn OrderSink>,
}

impl AppState {
    pub fn from_settings(settings: &Settings, catalog: Catalog) -> Result<AppState, SinkError> {
        let sink: Arc<dyn OrderSink> = match &settings.webhook {
            Some(webhook) => {
                info!("forwarding orders to {}", webhook.url);
                Arc::new(WebhookSink::new(webhook)?)
            }
            None => {
                info!("no ORDER_WEBHOOK_URL set, orders will only be logged");
                Arc::new(LogSink)
            }
        };

        Ok(AppState {
            catalog: Arc::new(catalog),
            policy: ValidationPolicy {
                require_delivery_address: settings.require_delivery_address,
            },
            owner_name: settings.owner_name.clone(),
            sink,
        })
    }
}

pub async fn build_app(app_state: Arc<AppState>, orders_per_minute: u64) -> Router {
    let api = Router::new()
        .nest("/orders", get_orders_router(Arc::clone(&app_state), orders_per_minute).await)
        .merge(get_public_router(Arc::clone(&app_state)).await);

    let cors = CorsLayer::new()
        .allow_credentials(false)
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .merge(get_pages_router(Arc::clone(&app_state)).await)
        .merge(get_order_form_router(Arc::clone(&app_state), orders_per_minute).await)
        .nest("/api", api)
        .layer(cors)
        .layer(CompressionLayer::new())
        .fallback(fallback)
        .with_state(app_state)
}

pub async fn init(settings: &Settings, app_state: AppState) -> Result<(), std::io::Error> {
    let app = build_app(Arc::new(app_state), settings.orders_per_minute).await;

    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("server running on {}", address);

    axum::serve(listener, app).await
}
