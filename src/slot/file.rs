use super::{Origin, SlotChange, SlotError, StorageSlot};
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;
use tracing::debug;

const CHANGE_BUFFER: usize = 16;

/// Durable slot backed by a JSON file.
///
/// Change notifications reach subscribers holding a clone of the same
/// `FileSlot` (views in one process); a slot reopened by another process
/// sees the last write on its initial read.
#[derive(Clone)]
pub struct FileSlot {
    path: PathBuf,
    changes: broadcast::Sender<SlotChange>,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            path: path.into(),
            changes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn write(&self, origin: Origin, value: &str) -> Result<(), SlotError> {
        std::fs::write(&self.path, value)?;
        debug!(path = %self.path.display(), bytes = value.len(), "Slot written");
        let _ = self.changes.send(SlotChange {
            origin,
            value: value.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SlotChange> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_unreadable_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("orders.json"));
        assert_eq!(slot.read(), None);
    }

    #[test]
    fn writes_survive_reopening_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");

        FileSlot::new(&path).write(1, "[]").unwrap();
        let reopened = FileSlot::new(&path);
        assert_eq!(reopened.read(), Some("[]".to_string()));
    }
}
