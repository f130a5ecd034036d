//! Core types and traits of the order stream

pub mod error;
pub mod generator;
pub mod order;
pub mod policy;
pub mod table;

pub use error::{StreamError, WriteError};
pub use generator::{OrderGenerator, OrderSource, generate_order};
pub use order::{Attribute, OrderItem, OrderRecord, Product};
pub use policy::FailurePolicy;
pub use table::{OrderTable, OrderWriter};
