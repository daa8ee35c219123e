//! # Order record
//!
//! A submitted, priced set of cart lines for a table. Everything except the
//! status is immutable once placed; the status moves `pending` → `completed`
//! exactly once. The serialized field names are the wire layout of the
//! persisted slot, so they are pinned here with serde attributes.

use super::cart::CartLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for submitted orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an order: one-way, no further states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

/// A submitted transaction.
///
/// Invariant: `total_price` equals the sum of line totals over `items`,
/// exactly, in integer currency units. [`Order::place`] derives it; nothing
/// ever recomputes or edits it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Table label from the fixed set, or the takeaway sentinel.
    pub table_number: String,
    /// Cart lines snapshotted by value at submission time.
    pub items: Vec<CartLine>,
    pub total_price: u64,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Stamped once at submission; ISO-8601 on the wire.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order from snapshotted cart lines, deriving the
    /// total from the lines themselves.
    pub fn place(
        id: OrderId,
        table: &str,
        items: Vec<CartLine>,
        customer: &str,
        at: DateTime<Utc>,
    ) -> Self {
        let total_price = items.iter().map(CartLine::line_total).sum();
        Self {
            id,
            table_number: table.to_string(),
            items,
            total_price,
            status: OrderStatus::Pending,
            customer_name: customer.to_string(),
            created_at: at,
        }
    }

    /// `pending` → `completed`. Returns whether a transition happened; an
    /// already-completed order is left untouched.
    pub fn complete(&mut self) -> bool {
        match self.status {
            OrderStatus::Pending => {
                self.status = OrderStatus::Completed;
                true
            }
            OrderStatus::Completed => false,
        }
    }
}
