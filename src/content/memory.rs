//! In-process content store backed by a JSON snapshot of the backend tables.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::store::{ContentStore, StoreError, StoreResult};
use crate::content::types::{
    ItemRow, KnowledgeRow, MenuItemRow, PageRow, PageSectionRow, SectionRow, TranslationRow,
};

/// Table dump; field names follow the backend table names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub pages: Vec<PageRow>,
    #[serde(default)]
    pub page_sections: Vec<PageSectionRow>,
    #[serde(default)]
    pub sections: Vec<SectionRow>,
    #[serde(default)]
    pub section_items: Vec<ItemRow>,
    #[serde(default)]
    pub menu_items: Vec<MenuItemRow>,
    #[serde(default)]
    pub translations: Vec<TranslationRow>,
    #[serde(default, rename = "azhar_knowledge")]
    pub knowledge: Vec<KnowledgeRow>,
}

/// Applies the same filters and orderings as the hosted backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: ContentSnapshot,
}

impl MemoryStore {
    pub fn new(snapshot: ContentSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content fixture {}", path.display()))?;
        let snapshot: ContentSnapshot = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse content fixture {}", path.display()))?;
        tracing::info!(
            "Loaded content fixture: {} sections, {} items, {} translations",
            snapshot.sections.len(),
            snapshot.section_items.len(),
            snapshot.translations.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &ContentSnapshot {
        &self.snapshot
    }
}

fn sorted_by_order<T>(rows: impl Iterator<Item = T>, order: impl Fn(&T) -> i64) -> Vec<T> {
    let mut rows: Vec<T> = rows.collect();
    rows.sort_by_key(|row| order(row));
    rows
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn home_page(&self) -> StoreResult<PageRow> {
        let mut homes = self
            .snapshot
            .pages
            .iter()
            .filter(|p| p.is_home && p.is_active);
        // Single-object semantics: zero or several matches both mean "no row".
        match (homes.next(), homes.next()) {
            (Some(page), None) => Ok(page.clone()),
            (None, _) => Err(StoreError::NotFound("no active home page".to_string())),
            (Some(_), Some(_)) => Err(StoreError::NotFound(
                "multiple active home pages".to_string(),
            )),
        }
    }

    async fn visible_page_sections(&self, page_id: &str) -> StoreResult<Vec<PageSectionRow>> {
        Ok(sorted_by_order(
            self.snapshot
                .page_sections
                .iter()
                .filter(|ps| ps.is_visible && ps.page_id.as_deref() == Some(page_id))
                .cloned(),
            |ps| ps.order_index,
        ))
    }

    async fn active_sections(&self) -> StoreResult<Vec<SectionRow>> {
        Ok(sorted_by_order(
            self.snapshot.sections.iter().filter(|s| s.is_active).cloned(),
            |s| s.order_index,
        ))
    }

    async fn sections_by_ids(&self, ids: &[String]) -> StoreResult<Vec<SectionRow>> {
        Ok(self
            .snapshot
            .sections
            .iter()
            .filter(|s| s.is_active && ids.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn section_items(&self, section_id: &str) -> StoreResult<Vec<ItemRow>> {
        Ok(sorted_by_order(
            self.snapshot
                .section_items
                .iter()
                .filter(|item| item.section_id == section_id)
                .cloned(),
            |item| item.order_index,
        ))
    }

    async fn active_menu_items(&self) -> StoreResult<Vec<MenuItemRow>> {
        Ok(sorted_by_order(
            self.snapshot.menu_items.iter().filter(|m| m.is_active).cloned(),
            |m| m.order_index,
        ))
    }

    async fn translations(&self) -> StoreResult<Vec<TranslationRow>> {
        let mut rows = self.snapshot.translations.clone();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(rows)
    }

    async fn knowledge(&self) -> StoreResult<Vec<KnowledgeRow>> {
        Ok(self.snapshot.knowledge.clone())
    }
}
