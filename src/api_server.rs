// Axum API Server Module
//
// Serves the assembled page as HTML and JSON, plus the assistant context
// lookup. Content is read fresh from the store on every request.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::config::{ContentSource, SiteConfig};
use crate::content::{ContentStore, MemoryStore, PostgrestStore};
use crate::i18n::Language;
use crate::knowledge::{greeting, AssistantContext};
use crate::menu::MenuEntry;
use crate::page::{load_knowledge, load_menu, load_page, load_translations, PageData};
use crate::web::handlers::render_home;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub default_language: Language,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn ContentStore> = match &config.source {
            ContentSource::Fixture(path) => {
                tracing::info!("Loading content fixture from {}...", path.display());
                Arc::new(MemoryStore::from_json_file(path)?)
            }
            ContentSource::Hosted { url, anon_key } => {
                tracing::info!("Connecting to content backend at {}...", url);
                Arc::new(PostgrestStore::new(url, anon_key, config.request_timeout)?)
            }
        };

        Ok(Self::with_store(store, config.default_language))
    }

    pub fn with_store(store: Arc<dyn ContentStore>, default_language: Language) -> Self {
        Self { store, default_language }
    }

    fn language(&self, requested: Option<&str>) -> Result<Language, AppError> {
        match requested.map(str::trim).filter(|code| !code.is_empty()) {
            None => Ok(self.default_language),
            Some(code) => code.parse().map_err(|e| AppError::BadRequest(format!("{}", e))),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML page
        .route("/", get(home_page))

        // JSON API
        .route("/api/page", get(get_page))
        .route("/api/menu", get(get_menu))
        .route("/api/assistant/context", get(get_assistant_context))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssistantQuery {
    q: Option<String>,
    lang: Option<String>,
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Html<String>, AppError> {
    let language = state.language(params.lang.as_deref())?;
    let page = load_page(state.store.as_ref(), language).await;
    Ok(Html(render_home(page)))
}

async fn get_page(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Json<PageData>, AppError> {
    let language = state.language(params.lang.as_deref())?;
    Ok(Json(load_page(state.store.as_ref(), language).await))
}

async fn get_menu(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Json<Vec<MenuEntry>>, AppError> {
    let language = state.language(params.lang.as_deref())?;
    let translations = load_translations(state.store.as_ref(), language).await;
    Ok(Json(load_menu(state.store.as_ref(), &translations).await))
}

/// Context for the hosted assistant; an empty question yields the greeting.
async fn get_assistant_context(
    State(state): State<AppState>,
    Query(params): Query<AssistantQuery>,
) -> Result<Json<AssistantContext>, AppError> {
    let language = state.language(params.lang.as_deref())?;
    let question = params.q.unwrap_or_default();

    if question.trim().is_empty() {
        return Ok(Json(AssistantContext {
            matched: false,
            context: greeting(language).to_string(),
        }));
    }

    let knowledge = load_knowledge(state.store.as_ref()).await;
    Ok(Json(knowledge.context_for(&question, language)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
