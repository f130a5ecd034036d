//! In-memory implementation of OrderTable for testing and development

use crate::core::{OrderItem, OrderRecord, OrderTable, WriteError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order table
///
/// Holds the same attribute maps the remote table would, with the same
/// replace-on-key semantics. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryOrderTable {
    items: Arc<RwLock<HashMap<String, OrderItem>>>,
    puts: Arc<AtomicU64>,
}

impl InMemoryOrderTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Item stored under `order_id`, if any
    pub fn get(&self, order_id: &str) -> Option<OrderItem> {
        self.items
            .read()
            .ok()
            .and_then(|items| items.get(order_id).cloned())
    }

    /// Number of distinct keys held
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of upserts accepted so far
    pub fn put_count(&self) -> u64 {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderTable for InMemoryOrderTable {
    async fn put_order(&self, record: &OrderRecord) -> Result<(), WriteError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| WriteError::new(&record.order_id, format!("Failed to acquire write lock: {}", e)))?;

        items.insert(record.order_id.clone(), record.attributes());
        self.puts.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
