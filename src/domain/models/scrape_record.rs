// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 问答记录
///
/// 一次成功抓取对应一条记录；插入后不可变更，
/// `created_at` 为插入时间而非请求时间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRecord {
    /// 记录ID，自增且稳定
    pub id: i64,
    /// 调用者邮箱，不校验可达性
    pub user_email: String,
    /// 目标网站URL，最长500字符
    pub website: String,
    /// 提出的问题
    pub query: String,
    /// 生成的答案，可能是占位字符串
    pub answer: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 待插入的问答记录
#[derive(Debug, Clone)]
pub struct NewScrapeRecord {
    pub user_email: String,
    pub website: String,
    pub query: String,
    pub answer: String,
}
