// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use askweb::config::settings::Settings;
use askweb::domain::services::answer_generator::AnswerGenerator;
use askweb::domain::services::content_extractor::ContentExtractor;
use askweb::infrastructure::database::connection;
use askweb::infrastructure::repositories::scrape_record_repo_impl::ScrapeRecordRepositoryImpl;
use askweb::presentation::routes;
use askweb::utils::telemetry;
use axum::Extension;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting askweb...");

    // 2. Load configuration
    // A missing Gemini API key fails here, before the server ever binds
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    // HTTP clients live for the whole process and are shared via Extension
    let extractor = Arc::new(ContentExtractor::new());
    let generator = Arc::new(AnswerGenerator::new(&settings.gemini));
    let record_repo = Arc::new(ScrapeRecordRepositoryImpl::new(db.clone()));

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(extractor))
        .layer(Extension(generator))
        .layer(Extension(record_repo))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
