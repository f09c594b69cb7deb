use crate::types::order::OrderRequest;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("order endpoint answered with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("order request timed out")]
    Timeout,

    #[error("could not reach the order endpoint: {0}")]
    Transport(String),

    #[error("order endpoint sent an unreadable response: {0}")]
    MalformedResponse(String),

    #[error("could not encode the order: {0}")]
    Encode(String),
}

impl SubmitError {
    /// The message the server asked us to show, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Where a validated order is sent.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, order: &OrderRequest) -> Result<(), SubmitError>;
}

pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<HttpOrderGateway, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        Ok(HttpOrderGateway {
            client,
            endpoint: endpoint.into(),
        })
    }
}

fn transport_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        SubmitError::Timeout
    } else {
        SubmitError::Transport(err.to_string())
    }
}

fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, order: &OrderRequest) -> Result<(), SubmitError> {
        let json_body = serde_json::to_vec(order).map_err(|err| SubmitError::Encode(err.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(json_body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        let parsed = serde_json::from_slice::<Value>(&bytes);
        debug!("order endpoint {} answered {}", self.endpoint, status);

        if status.is_success() {
            let body = parsed.map_err(|err| SubmitError::MalformedResponse(err.to_string()))?;
            return match error_message(&body) {
                Some(message) => Err(SubmitError::Rejected {
                    status: status.as_u16(),
                    message: Some(message),
                }),
                None => Ok(()),
            };
        }

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: parsed.ok().as_ref().and_then(error_message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::order::{DeliveryMethod, PaymentMethod};
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<(String, Value)>>>;

    fn order() -> OrderRequest {
        OrderRequest {
            customer_name: String::from("Maya"),
            customer_phone: String::from("4699824237"),
            delivery_method: DeliveryMethod::PickUp,
            delivery_address: None,
            products: vec![String::from("blowout")],
            quantity: None,
            cupcake_flavors: vec![],
            additional_notes: None,
            payment_method: PaymentMethod::Zelle,
            preferred_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            preferred_time: None,
            reference_image_url: None,
        }
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/orders", address)
    }

    async fn stub(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/api/orders", post(move || async move { (status, body) }));
        serve(app).await
    }

    fn gateway(endpoint: String) -> HttpOrderGateway {
        HttpOrderGateway::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_and_accepts_success() {
        let captured: Captured = Arc::new(Mutex::new(None));
        let app = Router::new()
            .route(
                "/api/orders",
                post(|State(captured): State<Captured>, headers: HeaderMap, body: String| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let value: Value = serde_json::from_str(&body).unwrap();
                    *captured.lock().unwrap() = Some((content_type, value));
                    (StatusCode::CREATED, r#"{"message":"order.created"}"#)
                }),
            )
            .with_state(Arc::clone(&captured));
        let endpoint = serve(app).await;

        gateway(endpoint).create_order(&order()).await.unwrap();

        let (content_type, body) = captured.lock().unwrap().take().unwrap();
        assert_eq!(content_type, "application/json");
        assert_eq!(body["preferredDate"], "2025-06-01");
        assert_eq!(body["deliveryMethod"], "Pick up");
        assert!(body.get("deliveryAddress").is_none());
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let endpoint = stub(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"db down"}"#).await;

        let err = gateway(endpoint).create_order(&order()).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 500,
                message: Some(String::from("db down"))
            }
        );
        assert_eq!(err.server_message(), Some("db down"));
    }

    #[tokio::test]
    async fn test_non_json_error_has_no_message() {
        let endpoint = stub(StatusCode::BAD_GATEWAY, "upstream exploded").await;

        let err = gateway(endpoint).create_order(&order()).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_success_with_unreadable_body_is_a_failure() {
        let endpoint = stub(StatusCode::OK, "<html>ok</html>").await;

        let err = gateway(endpoint).create_order(&order()).await.unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_success_with_error_field_is_a_failure() {
        let endpoint = stub(StatusCode::OK, r#"{"error":"orders are closed this week"}"#).await;

        let err = gateway(endpoint).create_order(&order()).await.unwrap_err();
        assert_eq!(err.server_message(), Some("orders are closed this week"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway(format!("http://{}/api/orders", address))
            .create_order(&order())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let app = Router::new().route(
            "/api/orders",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        );
        let endpoint = serve(app).await;

        let gateway = HttpOrderGateway::new(endpoint, Duration::from_millis(100)).unwrap();
        let err = gateway.create_order(&order()).await.unwrap_err();
        assert_eq!(err, SubmitError::Timeout);
    }
}
