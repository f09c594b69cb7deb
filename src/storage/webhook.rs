use super::{OrderSink, SinkError};
use crate::types::order::OrderRecord;
use crate::utilities::config::WebhookSettings;
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use log::debug;
use sha2::Sha256;

pub const SIGNATURE_HEADER: &str = "X-Signature";

type HmacSha256 = Hmac<Sha256>;

/// Hex encoded HMAC-SHA256 of `payload`.
pub fn sign(signing_key: &str, payload: &[u8]) -> Result<String, SinkError> {
    let mut mac = HmacSha256::new_from_slice(signing_key.as_bytes())
        .map_err(|_| SinkError::Encode(String::from("invalid signing key")))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Forwards accepted orders to an external notification service, signed so
/// the receiver can check they came from us.
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
    signing_key: String,
}

impl WebhookSink {
    pub fn new(settings: &WebhookSettings) -> Result<WebhookSink, SinkError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|err| SinkError::Transport(err.to_string()))?;

        Ok(WebhookSink {
            client,
            url: settings.url.clone(),
            signing_key: settings.signing_key.clone(),
        })
    }
}

#[async_trait]
impl OrderSink for WebhookSink {
    async fn deliver(&self, record: &OrderRecord) -> Result<(), SinkError> {
        let json_body = serde_json::to_vec(record).map_err(|err| SinkError::Encode(err.to_string()))?;
        let signature = sign(&self.signing_key, &json_body)?;

        let response = self
            .client
            .post(&self.url)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(json_body)
            .send()
            .await
            .map_err(|err| SinkError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("order {} forwarded to {}", record.id, self.url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::order::{DeliveryMethod, OrderRequest, PaymentMethod};
    use axum::{
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use chrono::{NaiveDate, Utc};
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    type Captured = Arc<Mutex<Vec<(String, Bytes)>>>;

    fn record() -> OrderRecord {
        OrderRecord {
            id: String::from("Xy12Ab34Cd56"),
            received_at: Utc::now(),
            order: OrderRequest {
                customer_name: String::from("Maya"),
                customer_phone: String::from("4699824237"),
                delivery_method: DeliveryMethod::Delivery,
                delivery_address: Some(String::from("12 Elm St, Plano, TX 75023")),
                products: vec![String::from("tiramisu")],
                quantity: Some(String::from("6")),
                cupcake_flavors: vec![],
                additional_notes: None,
                payment_method: PaymentMethod::CashOnDelivery,
                preferred_date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
                preferred_time: None,
                reference_image_url: None,
            },
        }
    }

    async fn receiver(status: StatusCode) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/hooks/orders",
                post(move |State(captured): State<Captured>, headers: HeaderMap, body: Bytes| async move {
                    let signature = headers
                        .get(SIGNATURE_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    captured.lock().unwrap().push((signature, body));
                    (status, "{}")
                }),
            )
            .with_state(Arc::clone(&captured));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/hooks/orders", address), captured)
    }

    fn settings(url: String) -> WebhookSettings {
        WebhookSettings {
            url,
            signing_key: String::from("shared-secret"),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_sign_is_hex_sha256() {
        let signature = sign("key", b"payload").unwrap();
        assert_eq!(signature.len(), 64);
        assert_eq!(signature, sign("key", b"payload").unwrap());
        assert_ne!(signature, sign("other", b"payload").unwrap());
    }

    #[tokio::test]
    async fn test_delivers_signed_record() {
        let (url, captured) = receiver(StatusCode::OK).await;
        let sink = WebhookSink::new(&settings(url)).unwrap();

        sink.deliver(&record()).await.unwrap();

        let calls = captured.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        let (signature, body) = &calls[0];
        assert_eq!(signature, &sign("shared-secret", body).unwrap());

        let delivered: OrderRecord = serde_json::from_slice(body).unwrap();
        assert_eq!(delivered.id, "Xy12Ab34Cd56");
        assert_eq!(delivered.order.products, vec!["tiramisu"]);
    }

    #[tokio::test]
    async fn test_receiver_failure_is_reported() {
        let (url, _) = receiver(StatusCode::SERVICE_UNAVAILABLE).await;
        let sink = WebhookSink::new(&settings(url)).unwrap();

        let err = sink.deliver(&record()).await.unwrap_err();
        assert_eq!(
            err,
            SinkError::Rejected {
                status: 503,
                body: String::from("{}")
            }
        );
    }
}
