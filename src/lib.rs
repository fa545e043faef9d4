//! Azhar rehabilitation center site
//!
//! Bilingual (Russian / Kazakh) landing page assembled from a hosted content
//! backend:
//! - `content/`: row types, the `ContentStore` seam and its backends, page
//!   section loading
//! - `i18n`: languages and translation lookup
//! - `render/`: section kinds projected into typed view models
//! - `menu`, `knowledge`: navigation and the assistant's context lookup
//! - `page`: one full render pass
//!
//! The `api` feature adds the axum server and askama templates.

pub mod config;
pub mod content;
pub mod i18n;
pub mod knowledge;
pub mod menu;
pub mod page;
pub mod render;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::{ConfigError, ContentSource, SiteConfig};
pub use content::{ContentStore, MemoryStore, Section, SectionKind, StoreError};
pub use i18n::{Language, TextSource, Translations};
pub use page::{load_page, PageData};
pub use render::{render_section, render_sections, RenderedSection};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
