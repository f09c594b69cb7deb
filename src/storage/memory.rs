use super::{OrderSink, SinkError};
use crate::types::order::OrderRecord;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<OrderRecord>>,
    failure: Option<SinkError>,
}

impl MemorySink {
    pub fn failing(error: SinkError) -> MemorySink {
        MemorySink {
            records: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn records(&self) -> Vec<OrderRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderSink for MemorySink {
    async fn deliver(&self, record: &OrderRecord) -> Result<(), SinkError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
