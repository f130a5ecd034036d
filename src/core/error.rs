//! Typed errors for the order stream
//!
//! - [`WriteError`]: a single upsert failed. Authentication, throttling,
//!   connectivity and malformed-item failures all land here undistinguished.
//! - [`StreamError`]: the driver loop stopped because its failure policy
//!   asked it to. The default policy never produces one.

use thiserror::Error;

/// A failed upsert of one order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write order {order_id}: {message}")]
pub struct WriteError {
    /// Key of the order that was not written
    pub order_id: String,
    /// Description reported by the table backend
    pub message: String,
}

impl WriteError {
    pub fn new(order_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            message: message.into(),
        }
    }
}

/// Reasons the driver loop gives up before a shutdown request
#[derive(Debug, Error)]
pub enum StreamError {
    /// The escalate policy surfaced a write failure
    #[error("write failure escalated: {0}")]
    Escalated(#[source] WriteError),

    /// Too many records in a row could not be written
    #[error("table unhealthy after {consecutive} consecutive failed writes")]
    Unhealthy {
        consecutive: u32,
        #[source]
        last: WriteError,
    },
}

impl StreamError {
    /// The write failure that ended the stream
    pub fn write_error(&self) -> &WriteError {
        match self {
            StreamError::Escalated(err) => err,
            StreamError::Unhealthy { last, .. } => last,
        }
    }
}
