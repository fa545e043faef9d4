//! Content store seam.
//!
//! Read access to the hosted backend tables. Writes belong to the admin
//! surface and are not exposed here.

use async_trait::async_trait;
use thiserror::Error;

use crate::content::types::{
    ItemRow, KnowledgeRow, MenuItemRow, PageRow, PageSectionRow, SectionRow, TranslationRow,
};

#[derive(Error, Debug)]
pub enum StoreError {
    /// Expected absence (e.g. no home page configured). Not a failure.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("failed to decode rows: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// The single active page flagged `is_home`; `NotFound` when there is none.
    async fn home_page(&self) -> StoreResult<PageRow>;

    /// Visible mapping rows for a page, ordered by page-scoped index.
    async fn visible_page_sections(&self, page_id: &str) -> StoreResult<Vec<PageSectionRow>>;

    /// All active sections, ordered by their own `order_index`.
    async fn active_sections(&self) -> StoreResult<Vec<SectionRow>>;

    /// Active sections among `ids`, in no particular order.
    async fn sections_by_ids(&self, ids: &[String]) -> StoreResult<Vec<SectionRow>>;

    /// Items of one section, ordered by `order_index`.
    async fn section_items(&self, section_id: &str) -> StoreResult<Vec<ItemRow>>;

    async fn active_menu_items(&self) -> StoreResult<Vec<MenuItemRow>>;

    async fn translations(&self) -> StoreResult<Vec<TranslationRow>>;

    async fn knowledge(&self) -> StoreResult<Vec<KnowledgeRow>>;
}
