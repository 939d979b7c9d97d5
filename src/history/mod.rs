pub mod storage;
pub mod store;

pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
pub use store::{HistoryCommand, HistoryStore, HISTORY_KEY};
