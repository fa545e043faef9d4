//! Raw rows as returned by the hosted content backend.
//!
//! Tables:
//! - `pages`: page records, one of them flagged `is_home`
//! - `page_sections`: page → section mapping with page-scoped order
//! - `sections` / `section_items`: the content tree
//! - `menu_items`, `translations`, `azhar_knowledge`
//!
//! Partial selects (e.g. `select=id`) are common, so every flag that the
//! backend filters on defaults to "passed the filter".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Accept both text (uuid) and numeric identifiers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Treat an explicit `null` like a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub is_home: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSectionRow {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub page_id: Option<String>,
    #[serde(deserialize_with = "id_string")]
    pub section_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub order_index: i64,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub section_key: String,
    pub section_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub order_index: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub css_classes: String,
    #[serde(default)]
    pub grid_columns: Option<u32>,
}

impl SectionRow {
    pub fn new(id: &str, section_key: &str, section_type: &str, order_index: i64) -> Self {
        Self {
            id: id.to_string(),
            section_key: section_key.to_string(),
            section_type: section_type.to_string(),
            order_index,
            is_active: true,
            css_classes: String::new(),
            grid_columns: None,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub section_id: String,
    pub item_type: String,
    #[serde(default)]
    pub content_key_badge: Option<String>,
    #[serde(default)]
    pub content_key_title: Option<String>,
    #[serde(default)]
    pub content_key_text: Option<String>,
    #[serde(default)]
    pub icon_text: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub order_index: i64,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl ItemRow {
    pub fn new(id: &str, section_id: &str, item_type: &str, order_index: i64) -> Self {
        Self {
            id: id.to_string(),
            section_id: section_id.to_string(),
            item_type: item_type.to_string(),
            content_key_badge: None,
            content_key_title: None,
            content_key_text: None,
            icon_text: None,
            order_index,
            metadata: None,
        }
    }

    pub fn with_badge(mut self, key: &str) -> Self {
        self.content_key_badge = Some(key.to_string());
        self
    }

    pub fn with_title(mut self, key: &str) -> Self {
        self.content_key_title = Some(key.to_string());
        self
    }

    pub fn with_text(mut self, key: &str) -> Self {
        self.content_key_text = Some(key.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon_text = Some(icon.to_string());
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRow {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub key: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub order_index: i64,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub parent_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRow {
    pub key: String,
    #[serde(default)]
    pub value_ru: Option<String>,
    #[serde(default)]
    pub value_kz: Option<String>,
}

/// One question/answer pair of the assistant's knowledge table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeRow {
    #[serde(default, deserialize_with = "null_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_default")]
    pub question_ru: String,
    #[serde(default, deserialize_with = "null_default")]
    pub answer_ru: String,
    #[serde(default, deserialize_with = "null_default")]
    pub question_kz: String,
    #[serde(default, deserialize_with = "null_default")]
    pub answer_kz: String,
    #[serde(default, deserialize_with = "null_default")]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_row_accepts_numeric_ids_and_nulls() {
        let row: ItemRow = serde_json::from_value(json!({
            "id": 42,
            "section_id": "sec-1",
            "item_type": "card",
            "content_key_title": null,
            "order_index": null,
            "metadata": null
        }))
        .unwrap();

        assert_eq!(row.id, "42");
        assert_eq!(row.section_id, "sec-1");
        assert_eq!(row.order_index, 0);
        assert!(row.content_key_title.is_none());
        assert!(row.metadata.is_none());
    }

    #[test]
    fn test_partial_select_defaults_flags() {
        let page: PageRow = serde_json::from_value(json!({ "id": "home" })).unwrap();
        assert!(page.is_active);
        assert!(!page.is_home);

        let mapping: PageSectionRow =
            serde_json::from_value(json!({ "section_id": 7, "order_index": 3 })).unwrap();
        assert_eq!(mapping.section_id, "7");
        assert!(mapping.is_visible);
        assert!(mapping.page_id.is_none());
    }

    #[test]
    fn test_knowledge_row_null_keywords() {
        let row: KnowledgeRow = serde_json::from_value(json!({
            "question_ru": "Где вы находитесь?",
            "answer_ru": "Павлодар",
            "keywords": null
        }))
        .unwrap();
        assert!(row.keywords.is_empty());
        assert_eq!(row.answer_kz, "");
    }
}
