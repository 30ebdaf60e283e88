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

use crate::domain::models::scrape_record::{NewScrapeRecord, ScrapeRecord};
use crate::domain::repositories::scrape_record_repository::{
    RepositoryError, ScrapeRecordRepository,
};
use crate::infrastructure::database::entities::scrape_record as scrape_record_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 问答记录仓库实现
pub struct ScrapeRecordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ScrapeRecordRepositoryImpl {
    /// 创建新的问答记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的问答记录仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScrapeRecordRepository for ScrapeRecordRepositoryImpl {
    async fn save(&self, record: NewScrapeRecord) -> Result<i64, RepositoryError> {
        // created_at is the insertion time, not the request time
        let active_model = scrape_record_entity::ActiveModel {
            user_email: Set(record.user_email),
            website: Set(record.website),
            query: Set(record.query),
            answer: Set(record.answer),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let result = scrape_record_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.last_insert_id)
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<ScrapeRecord>, RepositoryError> {
        let models = scrape_record_entity::Entity::find()
            .order_by_desc(scrape_record_entity::Column::CreatedAt)
            .order_by_desc(scrape_record_entity::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| ScrapeRecord {
                id: m.id,
                user_email: m.user_email,
                website: m.website,
                query: m.query,
                answer: m.answer,
                created_at: m.created_at.into(),
            })
            .collect())
    }
}
