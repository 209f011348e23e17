// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 分析请求数据传输对象
///
/// 封装客户端发起的页面分析请求。url缺失在处理器中映射为
/// 400，而不是交给反序列化拒绝。请求是瞬态的，不做持久化。
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeRequestDto {
    /// 要分析的页面URL
    pub url: Option<String>,
}
