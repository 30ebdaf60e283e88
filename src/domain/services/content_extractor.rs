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

use reqwest::{Client, StatusCode};
use scraper::Html;
use thiserror::Error;

/// 内容提取错误类型
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// 目标URL为空
    #[error("Website URL is empty")]
    EmptyUrl,
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 目标网站返回非200状态码
    #[error("Website returned status {0}")]
    HttpStatus(u16),
}

/// 内容提取服务
///
/// 对目标URL执行一次HTTP GET，并将HTML正文按文档顺序转换为纯文本。
/// 重定向交由客户端默认策略处理，成功与否以最终响应状态判断。
pub struct ContentExtractor {
    /// HTTP客户端，构造一次并复用
    client: Client,
}

impl ContentExtractor {
    /// 创建新的内容提取服务实例
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// 提取网页文本内容
    ///
    /// # 参数
    ///
    /// * `url` - 目标网页URL，必须非空；不做协议或格式预校验
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 按文档顺序拼接的纯文本
    /// * `Err(ExtractionError)` - 非200状态或网络层错误
    pub async fn extract(&self, url: &str) -> Result<String, ExtractionError> {
        if url.trim().is_empty() {
            return Err(ExtractionError::EmptyUrl);
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ExtractionError::HttpStatus(status.as_u16()));
        }

        // Any 200 body is treated as HTML; non-HTML payloads fall out as
        // their raw text.
        let body = response.text().await?;
        Ok(html_to_text(&body))
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 将HTML文档转换为纯文本
///
/// 按文档顺序拼接所有文本节点，跳过script与style子树的内容
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(fragment) = node.value().as_text() {
            let in_ignored_subtree = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|e| e.name()))
                .is_some_and(|name| matches!(name, "script" | "style"));
            if !in_ignored_subtree {
                text.push_str(fragment);
            }
        }
    }

    text
}
