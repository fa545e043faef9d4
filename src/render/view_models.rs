//! View Models for rendered page sections
//!
//! Structured data types for the JSON API and the HTML templates. Text slots
//! are `Option<String>`: `None` means "render nothing in this slot".

use serde::Serialize;

/// Presentation hints carried through from the section row untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SectionFrame {
    pub id: String,
    /// DOM anchor (`section_key`)
    pub anchor: String,
    pub css_classes: String,
    pub grid_columns: Option<u32>,
}

/// Badge / title / description block shared by grid sections.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SectionHeader {
    pub badge: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Icon + title + text tile used by feature lists and card grids.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TileView {
    pub id: String,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct HeroView {
    pub frame: SectionFrame,
    pub title: Option<String>,
    pub text: Option<String>,
    pub buttons: Vec<HeroButton>,
    pub cards: Vec<FloatingCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct HeroButton {
    pub id: String,
    pub label: Option<String>,
    pub href: String,
    pub variant: String,
}

impl HeroButton {
    pub fn css_class(&self) -> String {
        format!("btn btn-{}", self.variant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FloatingCard {
    pub id: String,
    pub position: String,
    pub icon: Option<String>,
    pub caption: Option<String>,
}

impl FloatingCard {
    pub fn css_class(&self) -> String {
        format!("floating-card {}", self.position).trim_end().to_string()
    }
}

// ============================================================================
// Features
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FeaturesView {
    pub frame: SectionFrame,
    pub header: SectionHeader,
    pub features: Vec<TileView>,
}

// ============================================================================
// Cards
// ============================================================================

/// Presentation switch for card grids; the data is the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    /// Compact value grid (`section_key == "values"`)
    ValuesCompact,
    /// Numbered service cards
    #[default]
    ServiceGrid,
}

impl CardLayout {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardLayout::ValuesCompact => "values-grid-compact",
            CardLayout::ServiceGrid => "services-grid",
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            CardLayout::ValuesCompact => "value-item",
            CardLayout::ServiceGrid => "service-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct CardsView {
    pub frame: SectionFrame,
    pub header: SectionHeader,
    pub layout: CardLayout,
    pub cards: Vec<TileView>,
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ContactView {
    pub frame: SectionFrame,
    pub title: Option<String>,
    pub text: Option<String>,
    /// First two contact items
    pub left: Vec<ContactEntry>,
    /// Everything after the first two
    pub right: Vec<ContactEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEntry {
    pub id: String,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub body: ContactBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContactBody {
    /// Single resolved text (left column)
    Text(Option<String>),
    /// Clickable phone numbers
    Phones(Vec<PhoneLink>),
    /// Text split into schedule paragraphs
    Paragraphs(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneLink {
    pub href: String,
    pub display: String,
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FooterView {
    pub frame: SectionFrame,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub copyright: Option<String>,
}

impl FooterView {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none() && self.copyright.is_none()
    }
}

// ============================================================================
// Dispatch result
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section_type", rename_all = "snake_case")]
pub enum RenderedSection {
    Hero(HeroView),
    Features(FeaturesView),
    Cards(CardsView),
    Contact(ContactView),
    Footer(FooterView),
}

impl RenderedSection {
    pub fn frame(&self) -> &SectionFrame {
        match self {
            RenderedSection::Hero(v) => &v.frame,
            RenderedSection::Features(v) => &v.frame,
            RenderedSection::Cards(v) => &v.frame,
            RenderedSection::Contact(v) => &v.frame,
            RenderedSection::Footer(v) => &v.frame,
        }
    }
}
