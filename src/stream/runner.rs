//! Driver loop: generate, write, wait, until shutdown

use crate::config::StreamConfig;
use crate::core::{
    FailurePolicy, OrderRecord, OrderSource, OrderTable, OrderWriter, StreamError, WriteError,
};
use crate::stream::ShutdownToken;
use std::time::Duration;

/// Counters reported when the stream stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Records generated and handed to the writer
    pub attempted: u64,
    pub written: u64,
    /// Records dropped after their last failed attempt
    pub failed: u64,
    /// Records whose retries were cut short by shutdown
    pub abandoned: u64,
}

/// Result of writing one record under the failure policy
enum WriteOutcome {
    Written,
    Failed(WriteError),
    /// Shutdown arrived while a retry was pending
    Abandoned,
}

/// The order stream
///
/// Runs on a single task: one record is generated, written and waited on
/// before the next one exists.
pub struct OrderStream<S, T> {
    source: S,
    writer: OrderWriter<T>,
    interval: Duration,
    policy: FailurePolicy,
    max_consecutive_failures: Option<u32>,
}

impl<S: OrderSource, T: OrderTable> OrderStream<S, T> {
    pub fn new(source: S, table: T, config: &StreamConfig) -> Self {
        Self {
            source,
            writer: OrderWriter::new(table),
            interval: config.interval(),
            policy: config.failure_policy,
            max_consecutive_failures: config.max_consecutive_failures,
        }
    }

    /// Run until `shutdown` fires or the failure policy gives up
    ///
    /// A write that has started always completes. The token is checked
    /// before each record and cuts the inter-write delay short.
    pub async fn run(&mut self, shutdown: &ShutdownToken) -> Result<StreamSummary, StreamError> {
        tracing::info!(
            table = %self.writer.table().describe(),
            interval_ms = self.interval.as_millis() as u64,
            "Starting to insert random gadget orders..."
        );

        let mut summary = StreamSummary::default();
        let mut consecutive_failures = 0u32;

        while !shutdown.is_triggered() {
            let record = self.source.next_order();
            summary.attempted += 1;

            match self.write_with_policy(&record, shutdown).await {
                WriteOutcome::Written => {
                    summary.written += 1;
                    consecutive_failures = 0;
                }
                WriteOutcome::Abandoned => {
                    summary.abandoned += 1;
                    break;
                }
                WriteOutcome::Failed(err) => {
                    summary.failed += 1;
                    consecutive_failures += 1;

                    if self.policy.escalates() {
                        return Err(StreamError::Escalated(err));
                    }
                    if let Some(limit) = self.max_consecutive_failures {
                        if consecutive_failures >= limit {
                            return Err(StreamError::Unhealthy {
                                consecutive: consecutive_failures,
                                last: err,
                            });
                        }
                    }
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.cancelled() => {}
            }
        }

        tracing::info!(
            attempted = summary.attempted,
            written = summary.written,
            failed = summary.failed,
            abandoned = summary.abandoned,
            "Script stopped manually"
        );
        Ok(summary)
    }

    async fn write_with_policy(
        &self,
        record: &OrderRecord,
        shutdown: &ShutdownToken,
    ) -> WriteOutcome {
        let attempts = self.policy.attempts().max(1);
        let mut attempt = 1;

        loop {
            match self.writer.write_order(record).await {
                Ok(()) => return WriteOutcome::Written,
                Err(err) if attempt >= attempts => return WriteOutcome::Failed(err),
                Err(_) => {
                    let delay = self.policy.backoff(attempt);
                    tracing::warn!(
                        order_id = %record.order_id,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying write"
                    );
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = shutdown.cancelled() => return WriteOutcome::Abandoned,
                    }
                    attempt += 1;
                }
            }
        }
    }
}
