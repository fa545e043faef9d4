//! HTTP client for the hosted backend's REST endpoint (`/rest/v1/<table>`).
//!
//! Filters use the backend's operator syntax (`eq.`, `in.(..)`), ordering via
//! `order=<column>`. No retries and no caching: a failed request is reported
//! to the caller, which decides how to degrade.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::content::store::{ContentStore, StoreError, StoreResult};
use crate::content::types::{
    ItemRow, KnowledgeRow, MenuItemRow, PageRow, PageSectionRow, SectionRow, TranslationRow,
};

/// Error code for "JSON object requested, multiple (or no) rows returned".
const NO_SINGLE_ROW: &str = "PGRST116";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Deserialize)]
struct BackendError {
    code: Option<String>,
    message: Option<String>,
}

pub struct PostgrestStore {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> StoreResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, table: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        self.http_client
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(query)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> StoreResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        if !status.is_success() {
            let parsed: Option<BackendError> = serde_json::from_str(&body).ok();
            let code = parsed.as_ref().and_then(|e| e.code.as_deref());
            let message = parsed
                .as_ref()
                .and_then(|e| e.message.clone())
                .unwrap_or_else(|| body.clone());
            if code == Some(NO_SINGLE_ROW) {
                return Err(StoreError::NotFound(message));
            }
            return Err(StoreError::Backend { status: status.as_u16(), message });
        }

        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> StoreResult<Vec<T>> {
        tracing::debug!("GET {} {:?}", table, query);
        self.send(self.request(table, query)).await
    }

    async fn fetch_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> StoreResult<T> {
        tracing::debug!("GET {} (single) {:?}", table, query);
        self.send(self.request(table, query).header("Accept", SINGLE_OBJECT))
            .await
    }
}

fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

fn in_list(ids: &[String]) -> String {
    let quoted: Vec<String> = ids
        .iter()
        .map(|id| format!("\"{}\"", id.replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}

#[async_trait]
impl ContentStore for PostgrestStore {
    async fn home_page(&self) -> StoreResult<PageRow> {
        self.fetch_single(
            "pages",
            &[
                ("select", "id".to_string()),
                ("is_home", eq(true)),
                ("is_active", eq(true)),
            ],
        )
        .await
    }

    async fn visible_page_sections(&self, page_id: &str) -> StoreResult<Vec<PageSectionRow>> {
        self.fetch_rows(
            "page_sections",
            &[
                ("select", "section_id,order_index".to_string()),
                ("page_id", eq(page_id)),
                ("is_visible", eq(true)),
                ("order", "order_index".to_string()),
            ],
        )
        .await
    }

    async fn active_sections(&self) -> StoreResult<Vec<SectionRow>> {
        self.fetch_rows(
            "sections",
            &[
                ("select", "*".to_string()),
                ("is_active", eq(true)),
                ("order", "order_index".to_string()),
            ],
        )
        .await
    }

    async fn sections_by_ids(&self, ids: &[String]) -> StoreResult<Vec<SectionRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_rows(
            "sections",
            &[
                ("select", "*".to_string()),
                ("id", in_list(ids)),
                ("is_active", eq(true)),
            ],
        )
        .await
    }

    async fn section_items(&self, section_id: &str) -> StoreResult<Vec<ItemRow>> {
        self.fetch_rows(
            "section_items",
            &[
                ("select", "*".to_string()),
                ("section_id", eq(section_id)),
                ("order", "order_index".to_string()),
            ],
        )
        .await
    }

    async fn active_menu_items(&self) -> StoreResult<Vec<MenuItemRow>> {
        self.fetch_rows(
            "menu_items",
            &[
                ("select", "*".to_string()),
                ("is_active", eq(true)),
                ("order", "order_index".to_string()),
            ],
        )
        .await
    }

    async fn translations(&self) -> StoreResult<Vec<TranslationRow>> {
        self.fetch_rows(
            "translations",
            &[
                ("select", "key,value_ru,value_kz".to_string()),
                ("order", "key".to_string()),
            ],
        )
        .await
    }

    async fn knowledge(&self) -> StoreResult<Vec<KnowledgeRow>> {
        self.fetch_rows("azhar_knowledge", &[("select", "*".to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = PostgrestStore::new("https://example.supabase.co/", "anon", Duration::from_secs(5)).unwrap();
        assert_eq!(store.table_url("sections"), "https://example.supabase.co/rest/v1/sections");
    }

    #[test]
    fn test_filter_syntax() {
        assert_eq!(eq(true), "eq.true");
        assert_eq!(eq("home"), "eq.home");
        assert_eq!(
            in_list(&["a1".to_string(), "b2".to_string()]),
            r#"in.("a1","b2")"#
        );
    }
}
