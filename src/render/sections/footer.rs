//! Footer: positional slots. The first content item supplies title and
//! subtitle, the second the copyright line; further items are ignored.

use crate::content::Section;
use crate::i18n::{resolve_slot, TextSource};
use crate::render::sections::frame_for;
use crate::render::view_models::FooterView;

pub fn build_footer(section: &Section, texts: &dyn TextSource) -> FooterView {
    let mut items = section.content_items();
    let title_item = items.next();
    let copyright_item = items.next();

    FooterView {
        frame: frame_for(section),
        title: title_item.and_then(|i| resolve_slot(texts, i.title_key.as_deref())),
        subtitle: title_item.and_then(|i| resolve_slot(texts, i.text_key.as_deref())),
        copyright: copyright_item.and_then(|i| resolve_slot(texts, i.text_key.as_deref())),
    }
}
