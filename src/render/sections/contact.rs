//! Contact: header title/text plus contact items split into two columns.
//!
//! The split is positional: the first two items go left, the rest go right.
//! Right-column items render phone links or schedule paragraphs.

use crate::content::{Item, ItemKind, ItemMetadata, Section};
use crate::i18n::{resolve_slot, TextSource};
use crate::render::schedule::{phone_display, split_schedule};
use crate::render::sections::frame_for;
use crate::render::view_models::{ContactBody, ContactEntry, ContactView, PhoneLink};

/// Number of contact items placed in the left column.
pub const LEFT_COLUMN_SIZE: usize = 2;

pub fn build_contact(section: &Section, texts: &dyn TextSource) -> ContactView {
    let header = section.header();
    let items: Vec<&Item> = section.items_of(ItemKind::ContactItem).collect();
    let split = items.len().min(LEFT_COLUMN_SIZE);
    let (left, right) = items.split_at(split);

    ContactView {
        frame: frame_for(section),
        title: header.and_then(|h| resolve_slot(texts, h.title_key.as_deref())),
        text: header.and_then(|h| resolve_slot(texts, h.text_key.as_deref())),
        left: left.iter().map(|item| left_entry(item, texts)).collect(),
        right: right.iter().map(|item| right_entry(item, texts)).collect(),
    }
}

fn left_entry(item: &Item, texts: &dyn TextSource) -> ContactEntry {
    ContactEntry {
        id: item.id.clone(),
        icon: item.icon_text.clone(),
        title: resolve_slot(texts, item.title_key.as_deref()),
        body: ContactBody::Text(resolve_slot(texts, item.text_key.as_deref())),
    }
}

fn right_entry(item: &Item, texts: &dyn TextSource) -> ContactEntry {
    let body = match &item.metadata {
        ItemMetadata::Phones(phones) => ContactBody::Phones(
            phones
                .iter()
                .map(|raw| PhoneLink { href: raw.clone(), display: phone_display(raw) })
                .collect(),
        ),
        _ => ContactBody::Paragraphs(
            resolve_slot(texts, item.text_key.as_deref())
                .map(|text| split_schedule(&text))
                .unwrap_or_default(),
        ),
    };

    ContactEntry {
        id: item.id.clone(),
        icon: item.icon_text.clone(),
        title: resolve_slot(texts, item.title_key.as_deref()),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sections::fixtures::{item, section, Texts};
    use serde_json::json;

    fn contact_items(count: usize) -> Vec<crate::content::types::ItemRow> {
        (0..count)
            .rev()
            .map(|i| item(&format!("c{}", i), "contact_item", i as i64).with_text("contact.text"))
            .collect()
    }

    #[test]
    fn test_column_split_for_any_count() {
        let texts = Texts::default();
        for count in 0..6 {
            let view = build_contact(&section("contacts", "contact", contact_items(count)), &texts);
            assert_eq!(view.left.len(), count.min(2), "left column for {} items", count);
            assert_eq!(view.right.len(), count.saturating_sub(2), "right column for {} items", count);

            let ids: Vec<String> = view.left.iter().chain(view.right.iter()).map(|e| e.id.clone()).collect();
            let expected: Vec<String> = (0..count).map(|i| format!("c{}", i)).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_right_column_bodies() {
        let texts = Texts::with(&[
            ("contact.title", "Контакты"),
            ("contact.address", "г. Павлодар"),
            ("contact.hours", "Работаем с 8 до 17. Обед: 12-13."),
        ]);
        let contacts = section(
            "contacts",
            "contact",
            vec![
                item("h", "header", 0).with_title("contact.title"),
                item("addr", "contact_item", 1).with_text("contact.address"),
                item("mail", "contact_item", 2)
                    .with_text("contact.mail")
                    .with_metadata(json!({ "type": "phone", "phones": ["tel:+70000000000"] })),
                item("phone", "contact_item", 3)
                    .with_title("contact.phone")
                    .with_metadata(json!({ "type": "phone", "phones": ["tel:+77084665715", "tel:+77182555210"] })),
                item("hours", "contact_item", 4).with_text("contact.hours"),
                item("empty", "contact_item", 5),
            ],
        );

        let view = build_contact(&contacts, &texts);
        assert_eq!(view.title.as_deref(), Some("Контакты"));

        // Left column always shows plain text, even for phone metadata
        assert_eq!(view.left[0].body, ContactBody::Text(Some("г. Павлодар".into())));
        assert_eq!(view.left[1].body, ContactBody::Text(Some("contact.mail".into())));

        assert_eq!(
            view.right[0].body,
            ContactBody::Phones(vec![
                PhoneLink { href: "tel:+77084665715".into(), display: "8 7084665715".into() },
                PhoneLink { href: "tel:+77182555210".into(), display: "8 7182555210".into() },
            ])
        );
        assert_eq!(
            view.right[1].body,
            ContactBody::Paragraphs(vec!["Работаем с 8 до 17.".into(), "Обед: 12-13.".into()])
        );
        assert_eq!(view.right[2].body, ContactBody::Paragraphs(Vec::new()));
    }
}
