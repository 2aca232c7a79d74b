pub mod catalog;
pub mod kv;
pub mod ledger;
pub mod seed;

pub use catalog::CatalogStore;
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore, SESSION_KEY, THEME_KEY};
pub use ledger::SaleLedger;
