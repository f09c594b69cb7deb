use crate::controllers::orders::DELIVERY_FAILED;
use crate::form::gateway::{OrderGateway, SubmitError};
use crate::form::{FormConfig, OrderForm, SubmitOutcome};
use crate::pages::{landing::render_landing, order::render_order_page};
use crate::server::AppState;
use crate::storage::{record_order, OrderSink};
use crate::types::order::{OrderFormFields, OrderRequest};

use async_trait::async_trait;
use axum::{http::StatusCode, response::Html};
use axum_extra::extract::Form;
use log::{debug, error};
use std::sync::Arc;

// Orders posted from the page skip the JSON hop and go straight to the sink.
struct SinkGateway {
    sink: Arc<dyn OrderSink>,
}

#[async_trait]
impl OrderGateway for SinkGateway {
    async fn create_order(&self, order: &OrderRequest) -> Result<(), SubmitError> {
        match record_order(self.sink.as_ref(), order.clone()).await {
            Ok(_) => Ok(()),
            Err(err) => {
                error!("order could not be delivered: {}", err);
                Err(SubmitError::Rejected {
                    status: StatusCode::BAD_GATEWAY.as_u16(),
                    message: Some(String::from(DELIVERY_FAILED)),
                })
            }
        }
    }
}

fn new_form(state: &AppState) -> OrderForm {
    OrderForm::new(
        FormConfig::new(Arc::clone(&state.catalog))
            .with_policy(state.policy)
            .with_owner_name(state.owner_name.clone()),
    )
}

pub async fn landing_page(state: Arc<AppState>) -> Html<String> {
    Html(render_landing(&state.catalog))
}

pub async fn order_page(state: Arc<AppState>) -> Html<String> {
    let form = new_form(&state);
    Html(render_order_page(&form.view(), &state.owner_name, &[]))
}

pub async fn submit_order_page(Form(fields): Form<OrderFormFields>, state: Arc<AppState>) -> (StatusCode, Html<String>) {
    let mut form = new_form(&state);
    form.apply(fields);

    let gateway = SinkGateway {
        sink: Arc::clone(&state.sink),
    };
    let status = match form.submit(&gateway).await {
        SubmitOutcome::Placed => StatusCode::CREATED,
        SubmitOutcome::Invalid => {
            debug!("order form failed validation: {:?}", form.errors().to_wire());
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmitOutcome::InFlight => StatusCode::CONFLICT,
        SubmitOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
    };

    let toasts = form.take_toasts();
    (status, Html(render_order_page(&form.view(), &state.owner_name, &toasts)))
}
