//! Content tree access
//!
//! - `types`: raw backend rows
//! - `model`: typed sections and items
//! - `store`: the content store seam (`ContentStore`)
//! - `memory`: snapshot-backed store (fixtures, tests)
//! - `postgrest`: hosted backend REST client (`api` feature)
//! - `repository`: ordered section tree for the home page

pub mod types;
pub mod model;
pub mod store;
pub mod memory;
pub mod repository;

#[cfg(feature = "api")]
pub mod postgrest;

pub use model::{Item, ItemKind, ItemMetadata, Section, SectionKind};
pub use store::{ContentStore, StoreError, StoreResult};
pub use memory::{ContentSnapshot, MemoryStore};
pub use repository::load_page_sections;

#[cfg(feature = "api")]
pub use postgrest::PostgrestStore;
