// Adapters layer: concrete storage backends behind the domain ports.

pub mod storage;

pub use storage::{EmbeddedStorage, LocalStorage};
