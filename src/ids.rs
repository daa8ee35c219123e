//! # Id generation and time
//!
//! Order ids and creation timestamps come from injectable generators so the
//! store stays deterministic under test. Production ids combine a
//! millisecond timestamp with a random suffix — unique with overwhelming
//! probability even under rapid successive submissions.

use crate::model::OrderId;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh order ids.
pub trait OrderIds: Send + Sync {
    fn next_order_id(&self) -> OrderId;
}

/// Production generator: `ORD-<unix millis>-<random suffix>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiptIds;

impl OrderIds for ReceiptIds {
    fn next_order_id(&self) -> OrderId {
        let millis = Utc::now().timestamp_millis();
        let suffix = Uuid::new_v4().simple().to_string();
        OrderId(format!("ORD-{}-{}", millis, &suffix[..4]))
    }
}

/// Deterministic counter-backed generator for tests.
#[derive(Debug)]
pub struct SequentialIds(AtomicU64);

impl SequentialIds {
    pub fn new() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIds for SequentialIds {
    fn next_order_id(&self) -> OrderId {
        OrderId(format!("ORD-{:04}", self.0.fetch_add(1, Ordering::SeqCst)))
    }
}

/// Source of order creation timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock that starts at a fixed instant and advances by a fixed number
/// of seconds on every reading, so successive orders get distinct,
/// predictable timestamps.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step_secs: i64,
    ticks: AtomicU64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step_secs: i64) -> Self {
        Self {
            start,
            step_secs,
            ticks: AtomicU64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst) as i64;
        self.start + chrono::Duration::seconds(self.step_secs * tick)
    }
}
