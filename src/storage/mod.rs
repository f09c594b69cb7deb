pub mod log_sink;
#[cfg(test)]
pub mod memory;
pub mod webhook;

use crate::types::order::{OrderRecord, OrderRequest};
use crate::utilities::helpers::random_string;
use async_trait::async_trait;
use chrono::Utc;
use log::info;

const ORDER_ID_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("order sink answered {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("could not reach order sink: {0}")]
    Transport(String),

    #[error("could not encode order: {0}")]
    Encode(String),
}

/// Receives accepted orders for follow-up by a person. What happens next
/// (email, text message, spreadsheet) is up to the implementation.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn deliver(&self, record: &OrderRecord) -> Result<(), SinkError>;
}

/// Stamps an accepted order with an id and arrival time and hands it to `sink`.
pub async fn record_order(sink: &dyn OrderSink, order: OrderRequest) -> Result<OrderRecord, SinkError> {
    let record = OrderRecord {
        id: random_string(ORDER_ID_LENGTH),
        received_at: Utc::now(),
        order,
    };

    sink.deliver(&record).await?;
    info!(
        "order {} accepted: {} product(s) for {}",
        record.id,
        record.order.products.len(),
        record.order.preferred_date
    );
    Ok(record)
}
