//! Content Repository Access
//!
//! Loads the ordered section tree for the home page:
//! 1. Resolve the active home page (missing or failed lookup → all active sections)
//! 2. Home page present → visible page-section mapping (empty mapping → nothing to render)
//! 3. Fetch section rows, then each section's items concurrently
//! 4. Mapping path → re-sort by page-scoped order (unmapped ids sort as 0)
//!
//! Fetch failures are logged and degrade to empty results for the affected
//! subset. Nothing is retried and nothing is cached: every call starts fresh.

use futures::future::join_all;
use rustc_hash::FxHashMap;

use crate::content::model::Section;
use crate::content::store::{ContentStore, StoreError};
use crate::content::types::SectionRow;

/// Ordered active sections with items attached. Never fails.
pub async fn load_page_sections(store: &dyn ContentStore) -> Vec<Section> {
    match store.home_page().await {
        Ok(page) => load_mapped_sections(store, &page.id).await,
        Err(StoreError::NotFound(reason)) => {
            tracing::debug!("No home page ({}), loading all active sections", reason);
            load_all_active_sections(store).await
        }
        Err(e) => {
            tracing::warn!("Error fetching home page ({}), loading all active sections", e);
            load_all_active_sections(store).await
        }
    }
}

async fn load_mapped_sections(store: &dyn ContentStore, page_id: &str) -> Vec<Section> {
    let mapping = match store.visible_page_sections(page_id).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Error fetching page sections for page {}: {}", page_id, e);
            return Vec::new();
        }
    };

    if mapping.is_empty() {
        tracing::debug!("Page {} has no visible sections", page_id);
        return Vec::new();
    }

    let section_ids: Vec<String> = mapping.iter().map(|ps| ps.section_id.clone()).collect();
    let rows = match store.sections_by_ids(&section_ids).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Error fetching sections for page {}: {}", page_id, e);
            return Vec::new();
        }
    };

    let mut sections = attach_items(store, rows).await;

    let page_order: FxHashMap<&str, i64> = mapping
        .iter()
        .map(|ps| (ps.section_id.as_str(), ps.order_index))
        .collect();
    sections.sort_by_key(|s| page_order.get(s.id.as_str()).copied().unwrap_or(0));

    tracing::debug!("Loaded {} sections for page {}", sections.len(), page_id);
    sections
}

async fn load_all_active_sections(store: &dyn ContentStore) -> Vec<Section> {
    let rows = match store.active_sections().await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Error fetching sections: {}", e);
            return Vec::new();
        }
    };

    let mut sections = attach_items(store, rows).await;
    sections.sort_by_key(|s| s.order_index);
    sections
}

/// Fetch every section's items concurrently; results keep the input order.
async fn attach_items(store: &dyn ContentStore, rows: Vec<SectionRow>) -> Vec<Section> {
    join_all(rows.into_iter().map(|row| async move {
        let items = match store.section_items(&row.id).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Error fetching items for section {}: {}", row.section_key, e);
                Vec::new()
            }
        };
        Section::from_rows(row, items)
    }))
    .await
}
