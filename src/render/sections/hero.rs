//! Hero: header title/text, call-to-action buttons, floating highlight cards.

use crate::content::{ItemKind, ItemMetadata, Section};
use crate::content::model::{DEFAULT_BUTTON_LINK, DEFAULT_BUTTON_VARIANT};
use crate::i18n::{resolve_slot, TextSource};
use crate::render::sections::frame_for;
use crate::render::view_models::{FloatingCard, HeroButton, HeroView};

pub fn build_hero(section: &Section, texts: &dyn TextSource) -> HeroView {
    let header = section.header();

    let buttons = section
        .items_of(ItemKind::Description)
        .map(|item| {
            let (href, variant) = match &item.metadata {
                ItemMetadata::Button { link, variant } => (link.clone(), variant.clone()),
                _ => (DEFAULT_BUTTON_LINK.to_string(), DEFAULT_BUTTON_VARIANT.to_string()),
            };
            HeroButton {
                id: item.id.clone(),
                label: resolve_slot(texts, item.title_key.as_deref()),
                href,
                variant,
            }
        })
        .collect();

    let cards = section
        .items_of(ItemKind::HeroCard)
        .map(|item| FloatingCard {
            id: item.id.clone(),
            position: match &item.metadata {
                ItemMetadata::Floating { position } => position.clone(),
                _ => String::new(),
            },
            icon: item.icon_text.clone(),
            caption: resolve_slot(texts, item.text_key.as_deref()),
        })
        .collect();

    HeroView {
        frame: frame_for(section),
        title: header.and_then(|h| resolve_slot(texts, h.title_key.as_deref())),
        text: header.and_then(|h| resolve_slot(texts, h.text_key.as_deref())),
        buttons,
        cards,
    }
}
