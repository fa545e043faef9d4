// Page handlers for HTML rendering with Askama

use askama::Template;

use crate::i18n::Language;
use crate::page::PageData;
// Variant paths used by the templates
use crate::render::{CardLayout, ContactBody, RenderedSection};

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub page: PageData,
    pub languages: [Language; 2],
}

impl HomeTemplate {
    pub fn new(page: PageData) -> Self {
        Self { page, languages: Language::all() }
    }
}

/// Render the home page, falling back to a plain error line.
pub fn render_home(page: PageData) -> String {
    HomeTemplate::new(page).render().unwrap_or_else(|e| {
        tracing::warn!("Template error: {}", e);
        format!("Template error: {}", e)
    })
}
