use crate::content::{ItemKind, Section};
use crate::i18n::TextSource;
use crate::render::sections::{frame_for, header_slots, tile};
use crate::render::view_models::{CardLayout, CardsView};

/// Section key that switches a card grid to the compact values layout.
pub const VALUES_SECTION_KEY: &str = "values";

pub fn card_layout(section_key: &str) -> CardLayout {
    if section_key == VALUES_SECTION_KEY {
        CardLayout::ValuesCompact
    } else {
        CardLayout::ServiceGrid
    }
}

pub fn build_cards(section: &Section, texts: &dyn TextSource) -> CardsView {
    CardsView {
        frame: frame_for(section),
        header: header_slots(section, texts),
        layout: card_layout(&section.key),
        cards: section
            .items_of(ItemKind::Card)
            .map(|item| tile(item, texts))
            .collect(),
    }
}
