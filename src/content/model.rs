//! Typed content tree: sections owning their ordered items.
//!
//! Stored rows carry string tags (`section_type`, `item_type`) and an untyped
//! `metadata` bag. Both are lifted into closed enums here, so the renderer can
//! match exhaustively.

use serde_json::Value;

use crate::content::types::{ItemRow, SectionRow};

/// Section layout tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Features,
    Cards,
    Contact,
    Footer,
    /// Unrecognised tag, kept verbatim. Renders nothing.
    Other(String),
}

impl SectionKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "hero" => SectionKind::Hero,
            "features" => SectionKind::Features,
            "cards" => SectionKind::Cards,
            "contact" => SectionKind::Contact,
            "footer" => SectionKind::Footer,
            other => SectionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Cards => "cards",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
            SectionKind::Other(tag) => tag,
        }
    }
}

/// Role of an item within its section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Header,
    Card,
    Feature,
    Description,
    ContactItem,
    HeroCard,
    FooterText,
    Other(String),
}

impl ItemKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "header" => ItemKind::Header,
            "card" => ItemKind::Card,
            "feature" => ItemKind::Feature,
            "description" => ItemKind::Description,
            "contact_item" => ItemKind::ContactItem,
            "hero_card" => ItemKind::HeroCard,
            "footer_text" => ItemKind::FooterText,
            other => ItemKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Header => "header",
            ItemKind::Card => "card",
            ItemKind::Feature => "feature",
            ItemKind::Description => "description",
            ItemKind::ContactItem => "contact_item",
            ItemKind::HeroCard => "hero_card",
            ItemKind::FooterText => "footer_text",
            ItemKind::Other(tag) => tag,
        }
    }
}

pub const DEFAULT_BUTTON_LINK: &str = "#";
pub const DEFAULT_BUTTON_VARIANT: &str = "primary";

/// Per-kind metadata payload recovered from the stored bag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemMetadata {
    #[default]
    None,
    /// Call-to-action button (`description` items).
    Button { link: String, variant: String },
    /// Floating highlight card (`hero_card` items).
    Floating { position: String },
    /// Contact entry listing phone numbers (`contact_item` with `type: "phone"`).
    Phones(Vec<String>),
}

impl ItemMetadata {
    pub fn from_raw(kind: &ItemKind, raw: Option<&Value>) -> Self {
        let bag = raw.and_then(Value::as_object);
        let get_str = |key: &str| {
            bag.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };

        match kind {
            ItemKind::Description => ItemMetadata::Button {
                link: get_str("btnLink").unwrap_or(DEFAULT_BUTTON_LINK).to_string(),
                variant: get_str("btnType").unwrap_or(DEFAULT_BUTTON_VARIANT).to_string(),
            },
            ItemKind::HeroCard => ItemMetadata::Floating {
                position: get_str("position").unwrap_or("").to_string(),
            },
            ItemKind::ContactItem if get_str("type") == Some("phone") => {
                let phones = bag
                    .and_then(|b| b.get("phones"))
                    .and_then(Value::as_array)
                    .map(|list| {
                        list.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                ItemMetadata::Phones(phones)
            }
            _ => ItemMetadata::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub section_id: String,
    pub kind: ItemKind,
    pub badge_key: Option<String>,
    pub title_key: Option<String>,
    pub text_key: Option<String>,
    pub icon_text: Option<String>,
    pub order_index: i64,
    pub metadata: ItemMetadata,
}

fn non_empty(key: Option<String>) -> Option<String> {
    key.filter(|k| !k.is_empty())
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        let kind = ItemKind::parse(&row.item_type);
        let metadata = ItemMetadata::from_raw(&kind, row.metadata.as_ref());
        Item {
            id: row.id,
            section_id: row.section_id,
            kind,
            badge_key: non_empty(row.content_key_badge),
            title_key: non_empty(row.content_key_title),
            text_key: non_empty(row.content_key_text),
            icon_text: non_empty(row.icon_text),
            order_index: row.order_index,
            metadata,
        }
    }
}

/// A page region with its items sorted by `order_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub key: String,
    pub kind: SectionKind,
    pub order_index: i64,
    pub is_active: bool,
    pub css_classes: String,
    pub grid_columns: Option<u32>,
    items: Vec<Item>,
}

impl Section {
    pub fn new(row: SectionRow, mut items: Vec<Item>) -> Self {
        // Stable: ties keep storage order.
        items.sort_by_key(|item| item.order_index);
        Section {
            kind: SectionKind::parse(&row.section_type),
            id: row.id,
            key: row.section_key,
            order_index: row.order_index,
            is_active: row.is_active,
            css_classes: row.css_classes,
            grid_columns: row.grid_columns,
            items,
        }
    }

    pub fn from_rows(row: SectionRow, item_rows: Vec<ItemRow>) -> Self {
        Self::new(row, item_rows.into_iter().map(Item::from).collect())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// First `header` item in order; later ones are ignored.
    pub fn header(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.kind == ItemKind::Header)
    }

    pub fn items_of(&self, kind: ItemKind) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// Every item except headers.
    pub fn content_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.kind != ItemKind::Header)
    }
}
