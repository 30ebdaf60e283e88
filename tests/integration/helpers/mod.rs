// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use askweb::config::settings::{DatabaseSettings, GeminiSettings};
use askweb::domain::services::answer_generator::AnswerGenerator;
use askweb::domain::services::content_extractor::ContentExtractor;
use askweb::infrastructure::database::connection;
use askweb::infrastructure::repositories::scrape_record_repo_impl::ScrapeRecordRepositoryImpl;
use askweb::presentation::routes;
use axum::Extension;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Gemini generateContent 的模拟路径
pub const GEMINI_GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    /// 模拟的目标网站
    pub site: MockServer,
    /// 模拟的Gemini API
    pub gemini: MockServer,
}

/// 创建测试应用
///
/// 使用内存SQLite数据库，目标网站和Gemini API均由wiremock模拟
pub async fn create_test_app() -> TestApp {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
    };

    let db_pool = Arc::new(
        connection::create_pool(&db_settings)
            .await
            .expect("Failed to connect to in-memory SQLite"),
    );

    Migrator::up(db_pool.as_ref(), None)
        .await
        .expect("Failed to run migrations");

    let site = MockServer::start().await;
    let gemini = MockServer::start().await;

    let gemini_settings = GeminiSettings {
        api_key: "test-key".to_string(),
        model: "gemini-pro".to_string(),
        api_base_url: format!("{}/v1beta", gemini.uri()),
    };

    let extractor = Arc::new(ContentExtractor::new());
    let generator = Arc::new(AnswerGenerator::new(&gemini_settings));
    let record_repo = Arc::new(ScrapeRecordRepositoryImpl::new(db_pool.clone()));

    let app = routes::routes()
        .layer(Extension(extractor))
        .layer(Extension(generator))
        .layer(Extension(record_repo));

    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        db_pool,
        site,
        gemini,
    }
}

/// 在模拟网站上挂载一个返回给定HTML的页面
pub async fn mount_site_page(app: &TestApp, page_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&app.site)
        .await;
}

/// 挂载一个返回给定文本片段的Gemini成功响应
pub async fn mount_gemini_answer(app: &TestApp, parts: &[&str]) {
    let parts_json: Vec<serde_json::Value> =
        parts.iter().map(|text| json!({ "text": text })).collect();

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": parts_json },
                "finishReason": "STOP"
            }]
        })))
        .mount(&app.gemini)
        .await;
}
