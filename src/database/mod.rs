pub mod models;
pub mod store;

pub use store::{JsonFileStore, MemoryStore, ScheduleStore, StoreManager};
