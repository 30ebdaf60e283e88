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

use serde::{Deserialize, Serialize};

/// 问答请求数据传输对象
///
/// 三个字段全部声明为可选：缺失的字段由处理器走内嵌的400
/// 校验路径，而不是被框架的反序列化拒绝。
#[derive(Debug, Deserialize, Serialize)]
pub struct AskWebsiteRequestDto {
    /// 调用者邮箱
    pub user_email: Option<String>,
    /// 目标网站URL
    pub input_website: Option<String>,
    /// 对网站提出的问题
    pub ask_query_form_website: Option<String>,
}
