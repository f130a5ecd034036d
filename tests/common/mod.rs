//! Test doubles shared by the integration tests

#![allow(dead_code)]

use order_stream::prelude::*;
use std::collections::HashSet;
use std::sync::Mutex;
use tokio::time::Instant;

/// Table that records every call, can fail chosen calls and can request
/// shutdown once enough calls have been made
pub struct ScriptedTable {
    inner: InMemoryOrderTable,
    calls: Mutex<Vec<Instant>>,
    failing: Mutex<HashSet<usize>>,
    always_fail: bool,
    stop_after: Option<(usize, ShutdownToken)>,
}

impl ScriptedTable {
    pub fn new() -> Self {
        Self {
            inner: InMemoryOrderTable::new(),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            always_fail: false,
            stop_after: None,
        }
    }

    /// Fail the calls with these zero-based indices
    pub fn failing_on(self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.failing.lock().unwrap().extend(calls);
        self
    }

    pub fn always_failing(mut self) -> Self {
        self.always_fail = true;
        self
    }

    /// Trigger `token` from inside the `n`th call, as if a signal arrived mid-write
    pub fn stop_after(mut self, n: usize, token: &ShutdownToken) -> Self {
        self.stop_after = Some((n, token.clone()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> &InMemoryOrderTable {
        &self.inner
    }
}

#[async_trait]
impl OrderTable for ScriptedTable {
    async fn put_order(&self, record: &OrderRecord) -> std::result::Result<(), WriteError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Instant::now());
            calls.len() - 1
        };

        let fails = self.always_fail || self.failing.lock().unwrap().contains(&index);
        let outcome = if fails {
            Err(WriteError::new(
                &record.order_id,
                "ProvisionedThroughputExceededException: rate exceeded",
            ))
        } else {
            self.inner.put_order(record).await
        };

        if let Some((n, token)) = &self.stop_after {
            if index + 1 >= *n {
                token.trigger();
            }
        }

        outcome
    }
}

/// Source that hands out the given records in a cycle
pub struct FixedSource {
    records: Vec<OrderRecord>,
    next: usize,
}

impl FixedSource {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        assert!(!records.is_empty());
        Self { records, next: 0 }
    }
}

impl OrderSource for FixedSource {
    fn next_order(&mut self) -> OrderRecord {
        let record = self.records[self.next % self.records.len()].clone();
        self.next += 1;
        record
    }
}

pub fn phone_order() -> OrderRecord {
    OrderRecord::new("42", Product::Phone, 3, "199.99".parse().unwrap())
}
