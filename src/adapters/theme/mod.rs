//! Preference storage adapters for the theme controller.

mod file_storage;
mod memory_storage;

pub use file_storage::JsonFilePreferenceStorage;
pub use memory_storage::InMemoryPreferenceStorage;
