//! # Storage slot
//!
//! The persistence adapter: a single named key-value slot mirroring the
//! serialized order collection, plus a change channel so every view attached
//! to the same slot hears about writes it did not make itself.
//!
//! Semantics follow the shared-storage model the rest of the system is built
//! on:
//!
//! - writes are **full-replace** — the whole serialized collection every
//!   time, never incremental;
//! - readers treat an absent or unreadable slot as "no data", silently;
//! - every write carries the writer's [`Origin`] token, and the write is
//!   broadcast to all subscribers *including* the writer — subscribers drop
//!   events carrying their own origin, which is what keeps a local write
//!   from re-triggering a local refresh;
//! - concurrent writers are last-write-wins, no merge.
//!
//! Two implementations: [`MemorySlot`] (a shared in-process slot — the moral
//! equivalent of two browser tabs over one localStorage key) and
//! [`FileSlot`] (a JSON file, durable across restarts).

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use thiserror::Error;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Fixed name of the shared order slot.
pub const SLOT_NAME: &str = "gourmet_orders";

/// Token identifying one writer attached to a slot. Random so tokens stay
/// distinct even across processes sharing a file slot.
pub type Origin = u64;

/// Allocates a fresh writer token.
pub fn next_origin() -> Origin {
    Uuid::new_v4().as_u128() as u64
}

/// Broadcast payload describing a completed write: who wrote, and the full
/// new slot value.
#[derive(Debug, Clone)]
pub struct SlotChange {
    pub origin: Origin,
    pub value: String,
}

/// Errors a slot write can produce. Reads never error: an unreadable slot
/// reads as absent.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// A durable key-value slot holding the serialized order collection.
pub trait StorageSlot: Send + Sync {
    /// Current slot contents. `None` when the slot has never been written or
    /// cannot be read.
    fn read(&self) -> Option<String>;

    /// Full-replace write, tagged with the writer's origin token. Broadcasts
    /// a [`SlotChange`] to every subscriber on success.
    fn write(&self, origin: Origin, value: &str) -> Result<(), SlotError>;

    /// Change notifications from every writer, own writes included;
    /// subscribers filter by origin.
    fn subscribe(&self) -> broadcast::Receiver<SlotChange>;
}
