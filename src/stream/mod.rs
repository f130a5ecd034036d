//! Stream lifecycle: the driver loop and how it is stopped

pub mod runner;
pub mod shutdown;

pub use runner::{OrderStream, StreamSummary};
pub use shutdown::{ShutdownToken, shutdown_signal, spawn_signal_listener};
