//! # Order store
//!
//! The in-memory order collection behind each view, kept as the "server"
//! half of an actor: the [`OrderStoreActor`] owns the `Vec<Order>` and
//! processes its request messages sequentially in its own task, so no lock
//! ever guards the collection. The [`OrderStoreClient`] is the cheap,
//! cloneable interface that turns method calls into messages.
//!
//! Beyond request handling, the actor's loop also listens on the storage
//! slot's change channel: a write made by *another* view (another actor on
//! the same slot) replaces the local collection wholesale, while the actor's
//! own writes are recognized by origin token and ignored. Mutations
//! (`submit`, a `complete` that actually transitions) serialize the full
//! collection and write it to the slot; queries never touch it.
//!
//! Failure semantics: a submission with an empty cart or no table is
//! rejected without touching the collection; completing an unknown or
//! already-completed order is an idempotent no-op; slot read/parse problems
//! degrade to an empty collection and slot write problems are logged and
//! absorbed.

mod actor;
mod client;
mod error;
mod message;

pub use actor::OrderStoreActor;
pub use client::OrderStoreClient;
pub use error::StoreError;
pub use message::{OrderFilter, StoreStats};

use crate::ids::{Clock, OrderIds};
use crate::slot::{self, StorageSlot};
use std::sync::Arc;
use tokio::sync::mpsc;

const REQUEST_BUFFER: usize = 32;

/// Creates a store actor attached to `slot` and its client. The actor must
/// be started with [`OrderStoreActor::run`]; it seeds its collection from
/// the slot on startup.
pub fn new(
    slot: Arc<dyn StorageSlot>,
    ids: Arc<dyn OrderIds>,
    clock: Arc<dyn Clock>,
) -> (OrderStoreActor, OrderStoreClient) {
    let (sender, receiver) = mpsc::channel(REQUEST_BUFFER);
    let actor = OrderStoreActor::new(receiver, slot::next_origin(), slot, ids, clock);
    (actor, OrderStoreClient::new(sender))
}
