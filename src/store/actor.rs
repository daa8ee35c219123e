//! # Order store actor
//!
//! The "server" half of the store. It owns the order collection and the
//! receiver end of the request channel, and it is the only code that ever
//! mutates either — one message at a time, no locks.

use super::error::StoreError;
use super::message::{OrderFilter, StoreRequest, StoreStats};
use crate::ids::{Clock, OrderIds};
use crate::model::{CartLine, Order, OrderId, OrderStatus};
use crate::slot::{Origin, SlotChange, StorageSlot};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct OrderStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    origin: Origin,
    slot: Arc<dyn StorageSlot>,
    ids: Arc<dyn OrderIds>,
    clock: Arc<dyn Clock>,
    orders: Vec<Order>,
}

impl OrderStoreActor {
    pub(super) fn new(
        receiver: mpsc::Receiver<StoreRequest>,
        origin: Origin,
        slot: Arc<dyn StorageSlot>,
        ids: Arc<dyn OrderIds>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            receiver,
            origin,
            slot,
            ids,
            clock,
            orders: Vec::new(),
        }
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// The loop serves two sources: requests from clients, and change
    /// notifications from the slot. A notification carrying a foreign
    /// origin replaces the local collection with the notified value; the
    /// actor's own writes come back with its own origin and are dropped,
    /// which is what keeps local writes from re-triggering a local refresh.
    pub async fn run(mut self) {
        let mut changes = self.slot.subscribe();
        self.orders = decode(self.slot.read().as_deref());
        info!(
            origin = self.origin,
            seeded = self.orders.len(),
            "Order store started"
        );

        // Cleared if the slot's change channel ever closes; the actor then
        // keeps serving requests from local state only.
        let mut watching = true;

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(request) => self.handle(request),
                    None => break,
                },
                change = changes.recv(), if watching => {
                    if matches!(&change, Err(broadcast::error::RecvError::Closed)) {
                        watching = false;
                    } else {
                        self.on_change(change);
                    }
                }
            }
        }

        info!(
            origin = self.origin,
            size = self.orders.len(),
            "Order store shut down"
        );
    }

    fn handle(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::Submit {
                lines,
                table,
                customer,
                respond_to,
            } => {
                let _ = respond_to.send(self.submit(lines, table, customer));
            }
            StoreRequest::Complete { id, respond_to } => {
                let _ = respond_to.send(Ok(self.complete(&id)));
            }
            StoreRequest::List { filter, respond_to } => {
                let _ = respond_to.send(Ok(self.list(filter)));
            }
            StoreRequest::Stats { respond_to } => {
                let _ = respond_to.send(Ok(self.stats()));
            }
            StoreRequest::Orders { respond_to } => {
                let _ = respond_to.send(Ok(self.orders.clone()));
            }
        }
    }

    fn submit(
        &mut self,
        lines: Vec<CartLine>,
        table: String,
        customer: String,
    ) -> Result<Order, StoreError> {
        if lines.is_empty() {
            warn!(origin = self.origin, "Rejected submission with empty cart");
            return Err(StoreError::EmptyCart);
        }
        if table.trim().is_empty() {
            warn!(origin = self.origin, "Rejected submission without a table");
            return Err(StoreError::NoTable);
        }

        let order = Order::place(
            self.ids.next_order_id(),
            &table,
            lines,
            &customer,
            self.clock.now(),
        );
        info!(
            origin = self.origin,
            id = %order.id,
            table = %order.table_number,
            total = order.total_price,
            "Order submitted"
        );
        self.orders.push(order.clone());
        self.persist();
        Ok(order)
    }

    fn complete(&mut self, id: &OrderId) -> bool {
        let transitioned = self
            .orders
            .iter_mut()
            .find(|order| &order.id == id)
            .map(|order| order.complete())
            .unwrap_or(false);

        if transitioned {
            info!(origin = self.origin, %id, "Order completed");
            self.persist();
        } else {
            debug!(origin = self.origin, %id, "Complete was a no-op");
        }
        transitioned
    }

    fn list(&self, filter: OrderFilter) -> Vec<Order> {
        let mut matching: Vec<Order> = self
            .orders
            .iter()
            .filter(|order| match filter {
                OrderFilter::All => true,
                OrderFilter::Pending => order.status == OrderStatus::Pending,
                OrderFilter::Completed => order.status == OrderStatus::Completed,
            })
            .cloned()
            .collect();
        // Most recent first; the sort is stable, so equal timestamps keep
        // insertion (submission) order as the tiebreak.
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            pending: self
                .orders
                .iter()
                .filter(|order| order.status == OrderStatus::Pending)
                .count(),
            revenue: self.orders.iter().map(|order| order.total_price).sum(),
        }
    }

    /// Mirrors the full collection into the slot. Write failures are logged
    /// and absorbed; the in-memory collection stays authoritative for this
    /// view.
    fn persist(&self) {
        match serde_json::to_string(&self.orders) {
            Ok(payload) => {
                if let Err(error) = self.slot.write(self.origin, &payload) {
                    warn!(
                        origin = self.origin,
                        error = %error,
                        "Slot write failed, keeping in-memory state"
                    );
                }
            }
            Err(error) => warn!(
                origin = self.origin,
                error = %error,
                "Could not serialize the order collection"
            ),
        }
    }

    fn on_change(&mut self, change: Result<SlotChange, broadcast::error::RecvError>) {
        match change {
            Ok(change) if change.origin == self.origin => {}
            Ok(change) => {
                self.orders = decode(Some(change.value.as_str()));
                debug!(
                    origin = self.origin,
                    from = change.origin,
                    size = self.orders.len(),
                    "Refreshed from external write"
                );
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                // Missed notifications; the slot itself has the latest value.
                warn!(
                    origin = self.origin,
                    skipped, "Change stream lagged, re-reading the slot"
                );
                self.orders = decode(self.slot.read().as_deref());
            }
            Err(broadcast::error::RecvError::Closed) => {}
        }
    }
}

/// Decodes slot contents into an order collection. Absence and malformed
/// content both degrade to an empty collection — never an error the user
/// sees.
fn decode(raw: Option<&str>) -> Vec<Order> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(orders) => orders,
        Err(error) => {
            warn!(%error, "Malformed slot contents, starting empty");
            Vec::new()
        }
    }
}
