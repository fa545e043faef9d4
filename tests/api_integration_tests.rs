// API Integration Tests
//
// Purpose: Exercise every endpoint against the demo content fixture
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use azhar_site::{create_router, AppState, ContentSource, Language, SiteConfig};
    use serde_json::Value;
    use std::path::PathBuf;
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app from the demo fixture
    fn create_test_app() -> axum::Router {
        let config = SiteConfig {
            source: ContentSource::Fixture(
                PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/content.json"),
            ),
            default_language: Language::Ru,
            port: 0,
            request_timeout: Duration::from_secs(1),
        };
        let state = AppState::new(&config).expect("demo fixture should load");
        create_router(state)
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn text_response(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Page JSON
    // =========================================================================

    #[tokio::test]
    async fn test_page_follows_home_mapping_order() {
        let body = json_response(get("/api/page").await).await;

        assert_eq!(body["language"], "ru");
        assert_eq!(body["site_title"], "Ажар");

        let anchors: Vec<&str> = body["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["frame"]["anchor"].as_str().unwrap())
            .collect();
        // Hidden "about" mapping is excluded; footer is last despite its own order 1
        assert_eq!(anchors, vec!["hero", "services", "values", "contact", "footer"]);
    }

    #[tokio::test]
    async fn test_page_projection_details() {
        let body = json_response(get("/api/page?lang=ru").await).await;
        let sections = body["sections"].as_array().unwrap();

        let hero = &sections[0];
        assert_eq!(hero["section_type"], "hero");
        assert_eq!(hero["title"], "Центр реабилитации «Ажар»");
        assert_eq!(hero["buttons"][1]["href"], "#services");
        assert_eq!(hero["buttons"][1]["variant"], "secondary");
        assert_eq!(hero["cards"][0]["position"], "card-1");

        assert_eq!(sections[1]["layout"], "service_grid");
        assert_eq!(sections[1]["frame"]["grid_columns"], 3);
        assert_eq!(sections[2]["layout"], "values_compact");

        let contact = &sections[3];
        assert_eq!(contact["left"].as_array().unwrap().len(), 2);
        let phones = &contact["right"][0]["body"];
        assert_eq!(phones["kind"], "phones");
        assert_eq!(phones["value"][0]["display"], "8 7182000000");
        let hours = &contact["right"][1]["body"];
        assert_eq!(hours["kind"], "paragraphs");
        assert_eq!(hours["value"][1], "Обед: 12:00-13:00");

        let footer = &sections[4];
        assert_eq!(footer["title"], "Ажар");
        assert_eq!(footer["copyright"], "© 2024 Ажар");
    }

    #[tokio::test]
    async fn test_page_kazakh_with_key_fallback() {
        let body = json_response(get("/api/page?lang=KZ").await).await;
        assert_eq!(body["language"], "kz");

        let services = &body["sections"][1];
        assert_eq!(services["header"]["title"], "Біз не ұсынамыз");
        // Empty Kazakh value falls back to the key
        assert_eq!(services["cards"][1]["text"], "services.massage.text");
    }

    #[tokio::test]
    async fn test_invalid_language_is_bad_request() {
        let response = get("/api/page?lang=en").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("en"));
    }

    // =========================================================================
    // Section 3: Menu
    // =========================================================================

    #[tokio::test]
    async fn test_menu() {
        let body = json_response(get("/api/menu?lang=kz").await).await;
        let menu = body.as_array().unwrap();

        let labels: Vec<&str> = menu.iter().map(|m| m["label"].as_str().unwrap()).collect();
        assert_eq!(labels, vec!["Орталық туралы", "Қызметтер", "Байланыс"]);
        assert_eq!(menu[1]["children"][0]["label"], "ЕДШ");
    }

    // =========================================================================
    // Section 4: Assistant Context
    // =========================================================================

    #[tokio::test]
    async fn test_assistant_direct_answer() {
        let uri = "/api/assistant/context?q=%D0%B3%D0%B4%D0%B5%20%D0%B0%D0%B4%D1%80%D0%B5%D1%81";
        let body = json_response(get(uri).await).await;
        assert_eq!(body["matched"], true);
        assert_eq!(body["context"], "Центр находится в г. Павлодар.");
    }

    #[tokio::test]
    async fn test_assistant_general_context() {
        let body = json_response(get("/api/assistant/context?q=hello%20there&lang=kz").await).await;
        assert_eq!(body["matched"], false);
        let context = body["context"].as_str().unwrap();
        assert!(context.starts_with("Q: Жұмыс кестесі қандай?\nA: "));
        assert!(context.contains("\n\nQ: Орталық қайда орналасқан?"));
    }

    #[tokio::test]
    async fn test_assistant_empty_question_greets() {
        let body = json_response(get("/api/assistant/context?lang=ru").await).await;
        assert_eq!(body["matched"], false);
        assert!(body["context"].as_str().unwrap().starts_with("Здравствуйте"));
    }

    // =========================================================================
    // Section 5: HTML
    // =========================================================================

    #[tokio::test]
    async fn test_home_html() {
        let response = get("/?lang=kz").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = text_response(response).await;
        assert!(html.contains(r#"<html lang="kz">"#));
        assert!(html.contains("«Ажар» оңалту орталығы"));
        assert!(html.contains(r#"class="values-grid-compact""#));
        assert!(html.contains(r#"href="tel:+77010000000""#));
        assert!(html.contains("footer-copyright"));
    }
}
