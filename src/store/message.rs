//! Request messages between the store client and the store actor.

use super::error::StoreError;
use crate::model::{CartLine, Order, OrderId};
use tokio::sync::oneshot;

/// One-shot response channel for a store request.
pub type Respond<T> = oneshot::Sender<Result<T, StoreError>>;

/// Dashboard filter over the order collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Quick dashboard figures: open orders and gross revenue over the whole
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub pending: usize,
    pub revenue: u64,
}

/// Message type sent to the store actor to request operations.
#[derive(Debug)]
pub enum StoreRequest {
    /// Create an order from snapshotted cart lines. Rejected with
    /// [`StoreError::EmptyCart`] / [`StoreError::NoTable`] before anything
    /// is created.
    Submit {
        lines: Vec<CartLine>,
        table: String,
        customer: String,
        respond_to: Respond<Order>,
    },
    /// Transition `pending` → `completed`. Responds with whether a
    /// transition happened; unknown or already-completed ids are a no-op.
    Complete {
        id: OrderId,
        respond_to: Respond<bool>,
    },
    /// Matching orders, most recent first.
    List {
        filter: OrderFilter,
        respond_to: Respond<Vec<Order>>,
    },
    /// Pending count and total revenue.
    Stats { respond_to: Respond<StoreStats> },
    /// The full collection in insertion order.
    Orders { respond_to: Respond<Vec<Order>> },
}
