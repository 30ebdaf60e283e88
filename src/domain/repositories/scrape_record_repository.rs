// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scrape_record::{NewScrapeRecord, ScrapeRecord};
use async_trait::async_trait;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// 问答记录仓库特质
///
/// 定义问答记录的数据访问接口。记录只追加：
/// 接口不暴露任何更新或删除操作。
#[async_trait]
pub trait ScrapeRecordRepository: Send + Sync {
    /// 保存问答记录，返回分配的ID
    async fn save(&self, record: NewScrapeRecord) -> Result<i64, RepositoryError>;
    /// 按创建时间倒序查询最近的记录
    async fn find_recent(&self, limit: u64) -> Result<Vec<ScrapeRecord>, RepositoryError>;
}
