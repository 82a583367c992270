pub mod audit;
pub mod credentials;
pub mod defaults;
pub mod export;
pub mod loader;
pub mod merge;
pub mod schema;
pub mod store;

pub use crate::domain::model::{ContentTables, RoleQuery, SectorTag, Table};
pub use crate::domain::ports::{ContentProvider, Storage};
pub use crate::utils::error::Result;
