// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use crate::application::dto::envelope::ResponseEnvelope;
use crate::domain::repositories::scrape_record_repository::ScrapeRecordRepository;
use crate::infrastructure::repositories::scrape_record_repo_impl::ScrapeRecordRepositoryImpl;

/// 默认返回的记录条数
const DEFAULT_LIMIT: u64 = 50;

/// 记录查询参数
#[derive(Debug, Deserialize)]
pub struct RecordsQueryDto {
    /// 返回条数上限
    pub limit: Option<u64>,
}

/// 最近问答记录端点处理器
///
/// 只读查询，按创建时间倒序返回 `{website, query, answer}` 投影
pub async fn recent_records(
    Extension(repository): Extension<Arc<ScrapeRecordRepositoryImpl>>,
    Query(params): Query<RecordsQueryDto>,
) -> Json<ResponseEnvelope> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    match repository.find_recent(limit).await {
        Ok(records) => {
            let data: Vec<Value> = records
                .iter()
                .map(|record| {
                    json!({
                        "website": record.website,
                        "query": record.query,
                        "answer": record.answer,
                    })
                })
                .collect();

            Json(ResponseEnvelope::success(
                "Records fetched successfully.",
                json!(data),
            ))
        }
        Err(e) => {
            error!("Failed to fetch scrape records: {}", e);
            Json(ResponseEnvelope::failed("An error occurred.", e.to_string()))
        }
    }
}
