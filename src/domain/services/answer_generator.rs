// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::settings::GeminiSettings;

/// 模型返回了候选但没有任何文本片段时的占位答案
pub const NO_CONTENT_PARTS: &str = "No content parts available.";
/// 模型没有返回任何候选、或调用失败时的占位答案
pub const NO_MODEL_RESPONSE: &str = "No response received from the model.";

/// 答案生成错误类型
#[derive(Error, Debug)]
pub enum GenerationError {
    /// 请求发送失败
    #[error("Request to model API failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 模型API返回错误状态
    #[error("Model API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },
}

/// 答案生成服务
///
/// 将网页内容与问题拼接为提示词，调用Gemini `generateContent`
/// 接口生成答案。配置在启动时注入，HTTP客户端构造一次并复用。
///
/// # 配置
///
/// 通过 [`GeminiSettings`] 注入：
/// - `api_key` - Gemini API密钥
/// - `model` - 模型标识符（默认 gemini-pro）
/// - `api_base_url` - API基础URL
pub struct AnswerGenerator {
    client: Client,
    api_key: String,
    model: String,
    api_base_url: String,
}

impl AnswerGenerator {
    /// 创建新的答案生成服务实例
    pub fn new(settings: &GeminiSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.clone(),
        }
    }

    /// 根据网页内容和问题生成答案
    ///
    /// # 参数
    ///
    /// * `content` - 提取到的网页纯文本，不做长度截断
    /// * `question` - 调用者提出的问题
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 答案文本；模型响应为空时为占位字符串
    /// * `Err(GenerationError)` - 调用失败（调用方决定是否中止流水线）
    pub async fn answer(&self, content: &str, question: &str) -> Result<String, GenerationError> {
        let prompt = format!("{}\n\n{}", content, question);
        let url = format!("{}/models/{}:generateContent", self.api_base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        Ok(extract_answer(&body))
    }
}

/// 从Gemini响应体中提取答案文本
///
/// 取第一个候选的全部文本片段，用单个空格拼接
fn extract_answer(body: &Value) -> String {
    let Some(candidate) = body["candidates"].as_array().and_then(|c| c.first()) else {
        return NO_MODEL_RESPONSE.to_string();
    };

    let texts: Vec<&str> = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect()
        })
        .unwrap_or_default();

    if texts.is_empty() {
        NO_CONTENT_PARTS.to_string()
    } else {
        texts.join(" ")
    }
}
