// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 内容提取服务（content_extractor）：抓取网页并转换为纯文本
/// - 答案生成服务（answer_generator）：调用Gemini模型生成答案
///
/// 两个服务都持有长生命周期的HTTP客户端，在启动时构造一次并复用。
pub mod answer_generator;
pub mod content_extractor;
