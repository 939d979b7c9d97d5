use tracing::{info, warn};

use super::storage::KeyValueStore;
use crate::apod::ImageRecord;
use crate::error::StorageError;

/// localStorage key holding the saved pictures.
pub const HISTORY_KEY: &str = "images";

/// A mutation of the saved history.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryCommand {
    Save { record: ImageRecord },
    Remove { id: u64 },
    Clear,
}

/// The saved pictures, newest first, mirrored to persistent storage.
///
/// Every mutation writes the whole list back and then reloads it, so the
/// in-memory list is always what a fresh page load would see.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    images: Vec<ImageRecord>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Open the store and load whatever is persisted.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            images: Vec::new(),
        };
        store.load();
        store
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reload from storage. Missing or unreadable data is an empty history.
    pub fn load(&mut self) -> &[ImageRecord] {
        self.images = match self.storage.get_raw(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ImageRecord>>(&raw) {
                Ok(mut images) => {
                    images.iter_mut().for_each(ImageRecord::fill_missing_hd_url);
                    images
                }
                Err(e) => {
                    warn!("Stored history is not valid JSON, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read stored history, starting empty: {}", e);
                Vec::new()
            }
        };
        &self.images
    }

    /// Insert `record` at the front.
    pub fn save(&mut self, record: ImageRecord) -> Result<(), StorageError> {
        let id = record.id;
        let mut next = Vec::with_capacity(self.images.len() + 1);
        next.push(record);
        next.extend(self.images.iter().cloned());

        self.persist(&next)?;
        info!("Saved picture {} ({} in history)", id, self.images.len());
        Ok(())
    }

    /// Drop every record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> Result<bool, StorageError> {
        let next: Vec<ImageRecord> = self
            .images
            .iter()
            .filter(|img| img.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.images.len();

        self.persist(&next)?;
        if removed {
            info!("Removed picture {} ({} left)", id, self.images.len());
        }
        Ok(removed)
    }

    /// Empty the history and delete the storage key itself.
    pub fn clear(&mut self) {
        self.images.clear();
        self.storage.remove(HISTORY_KEY);
        info!("Cleared history");
    }

    pub fn dispatch(&mut self, command: HistoryCommand) -> Result<(), StorageError> {
        match command {
            HistoryCommand::Save { record } => self.save(record),
            HistoryCommand::Remove { id } => self.remove(id).map(|_| ()),
            HistoryCommand::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Full overwrite followed by a reload. On failure nothing changes.
    fn persist(&mut self, next: &[ImageRecord]) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(next).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_raw(HISTORY_KEY, &raw)?;
        self.load();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::MemoryStorage;

    fn record(id: u64, title: &str) -> ImageRecord {
        ImageRecord {
            id,
            title: title.to_string(),
            date: "2024-01-01".to_string(),
            url: format!("{}.jpg", id),
            hd_url: format!("{}_hd.jpg", id),
            explanation: "...".to_string(),
            media_type: None,
            copyright: None,
        }
    }

    fn ids<S: KeyValueStore>(store: &HistoryStore<S>) -> Vec<u64> {
        store.records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_open_empty() {
        let store = HistoryStore::open(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_malformed_is_empty() {
        let storage = MemoryStorage::new();
        storage.set_raw(HISTORY_KEY, "[{\"id\": oops").unwrap();
        let store = HistoryStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_wrong_shape_is_empty() {
        let storage = MemoryStorage::new();
        storage.set_raw(HISTORY_KEY, r#"{"images": []}"#).unwrap();
        assert!(HistoryStore::open(storage).is_empty());
    }

    #[test]
    fn test_open_read_error_is_empty() {
        let storage = MemoryStorage::new();
        let raw = serde_json::to_string(&vec![record(1, "a")]).unwrap();
        storage.set_raw(HISTORY_KEY, &raw).unwrap();
        storage.set_fail_reads(true);
        let store = HistoryStore::open(&storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_inserts_at_front() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        store.save(record(1, "a")).unwrap();
        store.save(record(2, "b")).unwrap();
        store.save(record(3, "c")).unwrap();
        assert_eq!(ids(&store), vec![3, 2, 1]);
    }

    #[test]
    fn test_save_allows_duplicates() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        store.save(record(1, "a")).unwrap();
        store.save(record(1, "a")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_persists_all_fields() {
        let storage = MemoryStorage::new();
        let mut r = record(9, "Nebula");
        r.media_type = Some("image".to_string());
        r.copyright = Some("Jane Doe".to_string());
        {
            let mut store = HistoryStore::open(&storage);
            store.save(r.clone()).unwrap();
        }
        let reopened = HistoryStore::open(&storage);
        assert_eq!(reopened.records()[0], r);
    }

    #[test]
    fn test_failed_save_leaves_history_unchanged() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::open(&storage);
        store.save(record(1, "a")).unwrap();
        let before = storage.get_raw(HISTORY_KEY).unwrap();

        storage.set_fail_writes(true);
        assert!(store.save(record(2, "b")).is_err());
        assert_eq!(ids(&store), vec![1]);
        assert_eq!(storage.get_raw(HISTORY_KEY).unwrap(), before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        for id in 1..=4 {
            store.save(record(id, "x")).unwrap();
        }
        assert!(store.remove(3).unwrap());
        assert_eq!(ids(&store), vec![4, 2, 1]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        store.save(record(1, "a")).unwrap();
        store.save(record(2, "b")).unwrap();
        let before = store.records().to_vec();

        assert!(!store.remove(99).unwrap());
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_remove_on_empty_is_noop() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        assert!(!store.remove(1).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_deletes_key() {
        let storage = MemoryStorage::new();
        let mut store = HistoryStore::open(&storage);
        store.save(record(1, "a")).unwrap();
        assert!(storage.contains_key(HISTORY_KEY));

        store.clear();
        assert!(store.is_empty());
        assert!(!storage.contains_key(HISTORY_KEY));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_dispatch_commands() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        store
            .dispatch(HistoryCommand::Save { record: record(1, "a") })
            .unwrap();
        store
            .dispatch(HistoryCommand::Save { record: record(2, "b") })
            .unwrap();
        store.dispatch(HistoryCommand::Remove { id: 1 }).unwrap();
        assert_eq!(ids(&store), vec![2]);

        store.dispatch(HistoryCommand::Clear).unwrap();
        assert!(store.is_empty());
    }
}
