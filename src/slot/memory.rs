use super::{Origin, SlotChange, SlotError, StorageSlot};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;

const CHANGE_BUFFER: usize = 16;

/// Shared in-process slot. Clones observe the same value and the same
/// change channel, so several views in one process behave like browser tabs
/// over one localStorage key.
#[derive(Clone)]
pub struct MemorySlot {
    inner: Arc<Inner>,
}

struct Inner {
    value: Mutex<Option<String>>,
    changes: broadcast::Sender<SlotChange>,
}

impl MemorySlot {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(None),
                changes,
            }),
        }
    }

    /// A slot pre-loaded with raw contents, as if a previous process had
    /// written it. No change event is emitted.
    pub fn seeded(value: &str) -> Self {
        let slot = Self::new();
        *slot.inner.value.lock() = Some(value.to_string());
        slot
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.inner.value.lock().clone()
    }

    fn write(&self, origin: Origin, value: &str) -> Result<(), SlotError> {
        *self.inner.value.lock() = Some(value.to_string());
        // No subscribers yet is fine; the value is still stored.
        let _ = self.inner.changes.send(SlotChange {
            origin,
            value: value.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SlotChange> {
        self.inner.changes.subscribe()
    }
}
