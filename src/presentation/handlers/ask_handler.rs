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

use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::ask_request::AskWebsiteRequestDto;
use crate::application::dto::envelope::ResponseEnvelope;
use crate::domain::models::scrape_record::NewScrapeRecord;
use crate::domain::repositories::scrape_record_repository::ScrapeRecordRepository;
use crate::domain::services::answer_generator::{AnswerGenerator, NO_MODEL_RESPONSE};
use crate::domain::services::content_extractor::ContentExtractor;
use crate::infrastructure::repositories::scrape_record_repo_impl::ScrapeRecordRepositoryImpl;

/// 问答端点处理器
///
/// 单趟流水线：校验 → 抓取 → 生成 → 持久化 → 响应。
/// 抓取失败在写库前终止；生成失败从不终止流水线。
/// 所有结果都包在固定信封里，传输层一律返回HTTP 200。
pub async fn ask_website(
    Extension(extractor): Extension<Arc<ContentExtractor>>,
    Extension(generator): Extension<Arc<AnswerGenerator>>,
    Extension(repository): Extension<Arc<ScrapeRecordRepositoryImpl>>,
    Json(payload): Json<AskWebsiteRequestDto>,
) -> Json<ResponseEnvelope> {
    // All three fields must be present and non-empty
    let website = payload.input_website.unwrap_or_default();
    let query = payload.ask_query_form_website.unwrap_or_default();
    let user_email = payload.user_email.unwrap_or_default();

    if website.is_empty() || query.is_empty() {
        error!("Website URL or query not provided.");
        return Json(ResponseEnvelope::failure(
            400,
            "Please provide both the website URL and the query.",
            "Invalid input.",
        ));
    }

    if user_email.is_empty() {
        error!("User email not provided.");
        return Json(ResponseEnvelope::failure(
            400,
            "Please provide the user email.",
            "Invalid input.",
        ));
    }

    // Extraction failure halts the pipeline before anything is written
    let content = match extractor.extract(&website).await {
        Ok(content) => {
            info!("Website content successfully scraped.");
            content
        }
        Err(e) => {
            error!("Failed to scrape website content: {}", e);
            return Json(ResponseEnvelope::failure(
                500,
                "Failed to scrape website content.",
                "Could not scrape website content.",
            ));
        }
    };

    // A failed generation collapses into the placeholder answer; the record
    // is written either way
    let answer = match generator.answer(&content, &query).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("Error generating response: {}", e);
            NO_MODEL_RESPONSE.to_string()
        }
    };

    let record = NewScrapeRecord {
        user_email,
        website,
        query,
        answer: answer.clone(),
    };

    match repository.save(record).await {
        Ok(id) => {
            info!(record_id = id, "Data saved successfully in the database.");
            Json(ResponseEnvelope::success(
                "Question answered and saved successfully.",
                json!({ "answer": answer }),
            ))
        }
        Err(e) => {
            error!("Error during scraping and question asking: {}", e);
            Json(ResponseEnvelope::failed("An error occurred.", e.to_string()))
        }
    }
}
