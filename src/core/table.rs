//! Table seam and the writer wrapped around it

use crate::core::{OrderRecord, WriteError};
use async_trait::async_trait;
use std::sync::Arc;

/// Destination table for orders
///
/// Implementations perform one unconditional upsert keyed by `orderId`:
/// an existing item with the same key is replaced as a whole, nothing is
/// read first.
#[async_trait]
pub trait OrderTable: Send + Sync {
    /// Upsert a single order
    async fn put_order(&self, record: &OrderRecord) -> Result<(), WriteError>;

    /// Name used in log lines
    fn describe(&self) -> String {
        "table".to_string()
    }
}

#[async_trait]
impl<T: OrderTable + ?Sized> OrderTable for Arc<T> {
    async fn put_order(&self, record: &OrderRecord) -> Result<(), WriteError> {
        (**self).put_order(record).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Writes one order per call and reports the outcome on the console
pub struct OrderWriter<T> {
    table: T,
}

impl<T: OrderTable> OrderWriter<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Upsert `record` once
    ///
    /// The failure is logged here and handed back; deciding whether to retry
    /// or stop is left to the caller.
    pub async fn write_order(&self, record: &OrderRecord) -> Result<(), WriteError> {
        tracing::info!("{:?}", record);

        match self.table.put_order(record).await {
            Ok(()) => {
                tracing::info!(order_id = %record.order_id, "Inserted data: {:?}", record);
                Ok(())
            }
            Err(err) => {
                tracing::error!(order_id = %record.order_id, "Error inserting data: {}", err.message);
                Err(err)
            }
        }
    }
}
