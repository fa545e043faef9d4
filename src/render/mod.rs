//! Section Renderer
//!
//! Projects a section with its ordered items into a typed view, dispatching
//! on the section kind:
//! - hero: header, call-to-action buttons, floating cards
//! - features: header, feature list
//! - cards: header, card grid (compact layout for the `values` section)
//! - contact: header, two-column contact items, phone links, schedules
//! - footer: positional title/copyright
//!
//! Unknown kinds render nothing.

pub mod view_models;
pub mod schedule;
pub mod sections;

use crate::content::{Section, SectionKind};
use crate::i18n::TextSource;

pub use view_models::*;

pub fn render_section(section: &Section, texts: &dyn TextSource) -> Option<RenderedSection> {
    match &section.kind {
        SectionKind::Hero => Some(RenderedSection::Hero(sections::hero::build_hero(section, texts))),
        SectionKind::Features => Some(RenderedSection::Features(
            sections::features::build_features(section, texts),
        )),
        SectionKind::Cards => Some(RenderedSection::Cards(sections::cards::build_cards(section, texts))),
        SectionKind::Contact => Some(RenderedSection::Contact(
            sections::contact::build_contact(section, texts),
        )),
        SectionKind::Footer => Some(RenderedSection::Footer(
            sections::footer::build_footer(section, texts),
        )),
        SectionKind::Other(tag) => {
            tracing::debug!("Skipping section {} with unknown type '{}'", section.key, tag);
            None
        }
    }
}

/// Render in order, dropping sections that produce no output.
pub fn render_sections(sections: &[Section], texts: &dyn TextSource) -> Vec<RenderedSection> {
    sections
        .iter()
        .filter_map(|section| render_section(section, texts))
        .collect()
}
