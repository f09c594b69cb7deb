use crate::form::validation::validate;
use crate::server::AppState;
use crate::storage::record_order;
use crate::types::catalog::CUPCAKES;
use crate::types::order::OrderDraft;
use crate::types::response::{ErrorResponse, GenericResponse};
use crate::utilities::api_messages::{APIMessages, OrderMessages};
use crate::utilities::helpers::payload_analyzer;

use axum::response::{IntoResponse, Response};
use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use log::{debug, error};
use serde_json::json;
use std::sync::Arc;

pub const DELIVERY_FAILED: &str = "We couldn't record your order right now";

pub async fn create_order(
    payload_result: Result<Json<OrderDraft>, JsonRejection>,
    state: Arc<AppState>,
) -> Response {
    let payload = match payload_analyzer(payload_result) {
        Ok(payload) => payload,
        Err((status_code, json)) => {
            debug!("order payload rejected: {}", json.error);
            return (status_code, json).into_response();
        }
    };

    // the client can't be trusted, so run the same rules it did
    let order = match validate(&payload, &state.catalog, &state.policy) {
        Ok(order) => order,
        Err(errors) => {
            debug!("order failed validation: {:?}", errors.to_wire());
            let mut body = ErrorResponse::new(
                errors.first_message().unwrap_or("invalid order"),
                APIMessages::Order(OrderMessages::Invalid).to_string(),
            );
            body.fields = errors.to_wire();
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
        }
    };

    if !order.cupcake_flavors.is_empty() && !order.products.iter().any(|id| id == CUPCAKES) {
        debug!("order lists cupcake flavors without cupcakes, keeping them as notes for the owner");
    }

    match record_order(state.sink.as_ref(), order).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(GenericResponse {
                message: APIMessages::Order(OrderMessages::Created).to_string(),
                data: json!({ "id": record.id }),
                exit_code: 0,
            }),
        )
            .into_response(),
        Err(err) => {
            error!("order could not be delivered: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    DELIVERY_FAILED,
                    APIMessages::Order(OrderMessages::DeliveryFailed).to_string(),
                )),
            )
                .into_response()
        }
    }
}
