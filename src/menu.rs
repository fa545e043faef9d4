//! Site navigation: two-level menu built from `menu_items` rows.

use serde::Serialize;

use crate::content::types::MenuItemRow;
use crate::i18n::TextSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLink {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    pub url: String,
    pub children: Vec<MenuLink>,
}

impl MenuEntry {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

fn is_top_level(row: &MenuItemRow) -> bool {
    row.parent_id.as_deref().map_or(true, str::is_empty)
}

/// Rows are expected active and ordered. Children whose parent is missing
/// (or is itself a child) are not rendered.
pub fn build_menu(rows: &[MenuItemRow], texts: &dyn TextSource) -> Vec<MenuEntry> {
    rows.iter()
        .filter(|row| is_top_level(row))
        .map(|parent| MenuEntry {
            id: parent.id.clone(),
            label: texts.text(&parent.key),
            url: parent.url.clone(),
            children: rows
                .iter()
                .filter(|row| row.parent_id.as_deref() == Some(parent.id.as_str()))
                .map(|child| MenuLink {
                    id: child.id.clone(),
                    label: texts.text(&child.key),
                    url: child.url.clone(),
                })
                .collect(),
        })
        .collect()
}
