//! Section projections, one module per `section_type`.
//!
//! Each builder is a pure function of one section and the text source. Items
//! arrive already ordered (see `Section::new`).

pub mod hero;
pub mod features;
pub mod cards;
pub mod contact;
pub mod footer;

use crate::content::{Item, Section};
use crate::i18n::{resolve_slot, TextSource};
use crate::render::view_models::{SectionFrame, SectionHeader, TileView};

pub(crate) fn frame_for(section: &Section) -> SectionFrame {
    SectionFrame {
        id: section.id.clone(),
        anchor: section.key.clone(),
        css_classes: section.css_classes.clone(),
        grid_columns: section.grid_columns,
    }
}

/// Badge/title/description from the section's header item, if any.
pub(crate) fn header_slots(section: &Section, texts: &dyn TextSource) -> SectionHeader {
    match section.header() {
        Some(header) => SectionHeader {
            badge: resolve_slot(texts, header.badge_key.as_deref()),
            title: resolve_slot(texts, header.title_key.as_deref()),
            description: resolve_slot(texts, header.text_key.as_deref()),
        },
        None => SectionHeader::default(),
    }
}

pub(crate) fn tile(item: &Item, texts: &dyn TextSource) -> TileView {
    TileView {
        id: item.id.clone(),
        icon: item.icon_text.clone(),
        title: resolve_slot(texts, item.title_key.as_deref()),
        text: resolve_slot(texts, item.text_key.as_deref()),
    }
}
