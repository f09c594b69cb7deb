use super::{OrderSink, SinkError};
use crate::types::order::OrderRecord;
use async_trait::async_trait;
use log::info;

/// Writes accepted orders to the log. Used when no webhook is configured.
pub struct LogSink;

#[async_trait]
impl OrderSink for LogSink {
    async fn deliver(&self, record: &OrderRecord) -> Result<(), SinkError> {
        let json = serde_json::to_string(record).map_err(|err| SinkError::Encode(err.to_string()))?;
        info!("order {} received: {}", record.id, json);
        Ok(())
    }
}
