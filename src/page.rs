//! Page assembly
//!
//! One render pass: translations for the requested language, menu, ordered
//! sections, then projection. Everything is fetched fresh per call; a failed
//! fetch degrades to an empty part of the page.

use serde::Serialize;

use crate::content::{load_page_sections, ContentStore};
use crate::i18n::{Language, TextSource, Translations};
use crate::knowledge::KnowledgeBase;
use crate::menu::{build_menu, MenuEntry};
use crate::render::{render_sections, RenderedSection};

/// Translation key of the site name shown in the header.
pub const SITE_TITLE_KEY: &str = "header.title";

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub language: Language,
    pub site_title: String,
    pub menu: Vec<MenuEntry>,
    pub sections: Vec<RenderedSection>,
}

pub async fn load_translations(store: &dyn ContentStore, language: Language) -> Translations {
    match store.translations().await {
        Ok(rows) => {
            let translations = Translations::from_rows(language, rows);
            tracing::debug!("Loaded {} translations for {}", translations.len(), language);
            translations
        }
        Err(e) => {
            tracing::warn!("Error loading translations for {}: {}", language, e);
            Translations::empty(language)
        }
    }
}

pub async fn load_menu(store: &dyn ContentStore, translations: &Translations) -> Vec<MenuEntry> {
    match store.active_menu_items().await {
        Ok(rows) => build_menu(&rows, translations),
        Err(e) => {
            tracing::warn!("Error loading menu: {}", e);
            Vec::new()
        }
    }
}

pub async fn load_knowledge(store: &dyn ContentStore) -> KnowledgeBase {
    match store.knowledge().await {
        Ok(rows) => KnowledgeBase::new(rows),
        Err(e) => {
            tracing::warn!("Error loading knowledge base: {}", e);
            KnowledgeBase::default()
        }
    }
}

pub async fn load_page(store: &dyn ContentStore, language: Language) -> PageData {
    // Rendering waits for the translation table, as the page does
    let translations = load_translations(store, language).await;

    let (menu, sections) = futures::join!(
        load_menu(store, &translations),
        load_page_sections(store)
    );

    let rendered = render_sections(&sections, &translations);
    tracing::debug!(
        "Rendered {} of {} sections ({})",
        rendered.len(),
        sections.len(),
        language
    );

    PageData {
        language,
        site_title: translations.text(SITE_TITLE_KEY),
        menu,
        sections: rendered,
    }
}
