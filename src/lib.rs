//! Typed, read-only careers-guidance content: countries, sectors, occupations,
//! skills, ventures and pathway configuration, with total lookup operations.
//!
//! Build a [`ContentStore`] once (from the compiled-in tables or a directory of
//! JSON documents) and share it by reference; nothing mutates it afterwards.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{EmbeddedStorage, LocalStorage};
pub use crate::config::RuntimeConfig;
#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};
pub use crate::core::{
    audit::ContentAudit, export::ContentExporter, export::ExportFormat, loader::ContentLoader,
    store::ContentStore,
};
pub use crate::domain::model::{RoleQuery, SectorTag};
pub use crate::utils::error::{ContentError, Result};
