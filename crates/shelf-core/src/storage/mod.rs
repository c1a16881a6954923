//! Persistence backends for the inventory store.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use traits::StorageBackend;
