//! # order-stream
//!
//! Generates synthetic gadget orders and upserts them one at a time into a
//! DynamoDB table, pausing between writes to emulate a live stream for
//! change-capture consumers downstream.
//!
//! ## Features
//!
//! - **Seedable generator**: orders drawn from an explicit random source
//! - **Exact prices**: `rust_decimal` end to end, no float on the wire
//! - **Upsert writes**: one `PutItem` per order, keyed by `orderId`
//! - **Failure policies**: log-and-continue, retry with backoff, or escalate
//! - **Clean shutdown**: Ctrl+C / SIGTERM routed through a cancellation token
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_stream::prelude::*;
//!
//! let config = StreamConfig::load()?;
//! let table = DynamoDBOrderTable::from_config(&config).await;
//! let shutdown = ShutdownToken::new();
//! spawn_signal_listener(shutdown.clone());
//!
//! let mut stream = OrderStream::new(OrderGenerator::from_entropy(), table, &config);
//! let summary = stream.run(&shutdown).await?;
//! ```

pub mod config;
pub mod core;
pub mod storage;
pub mod stream;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Attribute, FailurePolicy, OrderGenerator, OrderItem, OrderRecord, OrderSource,
        OrderTable, OrderWriter, Product, StreamError, WriteError, generate_order,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderTable;
    #[cfg(feature = "dynamodb")]
    pub use crate::storage::DynamoDBOrderTable;

    // === Config ===
    pub use crate::config::StreamConfig;

    // === Stream ===
    pub use crate::stream::{
        OrderStream, ShutdownToken, StreamSummary, shutdown_signal, spawn_signal_listener,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use rust_decimal::Decimal;
}
