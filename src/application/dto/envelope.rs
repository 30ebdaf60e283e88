// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 成功路径的状态字面量
pub const STATUS_SUCCESS: &str = "SUCCESS";
/// 预期失败路径（校验失败、抓取失败）的状态字面量
pub const STATUS_FAILURE: &str = "FAILURE";
/// 非预期故障路径的状态字面量
pub const STATUS_FAILED: &str = "FAILED";

/// 响应信封
///
/// 所有出站响应使用同一固定结构。传输层始终返回HTTP 200，
/// 业务结果由内嵌的 `response_code`、`statusFlag` 和 `status` 表达。
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// 内嵌的业务状态码
    pub response_code: u16,
    /// 人类可读的结果描述
    pub message: String,
    /// 成功与否标志
    #[serde(rename = "statusFlag")]
    pub status_flag: bool,
    /// 状态字面量：SUCCESS、FAILURE 或 FAILED
    pub status: String,
    /// 失败详情，成功信封不携带该字段
    #[serde(rename = "errorDetails", skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    /// 载荷；失败时为空数组
    pub data: Value,
}

impl ResponseEnvelope {
    /// 构造成功信封
    pub fn success(message: impl Into<String>, data: Value) -> Self {
        Self {
            response_code: 200,
            message: message.into(),
            status_flag: true,
            status: STATUS_SUCCESS.to_string(),
            error_details: None,
            data,
        }
    }

    /// 构造预期失败信封
    pub fn failure(
        response_code: u16,
        message: impl Into<String>,
        error_details: impl Into<String>,
    ) -> Self {
        Self {
            response_code,
            message: message.into(),
            status_flag: false,
            status: STATUS_FAILURE.to_string(),
            error_details: Some(error_details.into()),
            data: json!([]),
        }
    }

    /// 构造非预期故障信封
    pub fn failed(message: impl Into<String>, error_details: impl Into<String>) -> Self {
        Self {
            response_code: 500,
            message: message.into(),
            status_flag: false,
            status: STATUS_FAILED.to_string(),
            error_details: Some(error_details.into()),
            data: json!([]),
        }
    }
}
