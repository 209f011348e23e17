// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::ScoringReport;
use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// 评分调用错误
///
/// 把出站评分调用的所有失败形态归一为四类：
/// 用户可纠正的输入错误、服务端凭证缺失、传输层失败、
/// 以及上游自身报告的错误（保留原始状态码）。
#[derive(Debug, Error, Clone)]
pub enum ScoringError {
    /// 输入URL为空或不是带scheme的绝对URL
    #[error("{0}")]
    InvalidInput(String),
    /// 服务端未配置评分API凭证
    #[error("scoring API credential is not configured")]
    Configuration,
    /// 网络不可达、连接超时等传输层失败
    #[error("scoring service unreachable: {0}")]
    UpstreamUnavailable(String),
    /// 上游返回非成功状态码
    #[error("scoring service error ({status}): {message}")]
    Upstream { status: u16, message: String },
}

/// 评分提供者接口
///
/// 面向外部性能评分服务的统一调用契约。每次调用最多发起
/// 一次出站请求，不做重试；重试由调用方（用户再次提交）负责。
#[async_trait]
pub trait ScoringProvider: Send + Sync {
    /// 对目标URL执行一次性能分析
    ///
    /// # 参数
    ///
    /// * `url` - 要分析的页面URL
    ///
    /// # 返回值
    ///
    /// * `Ok(ScoringReport)` - 解析后的评分报告，内容原样保留
    /// * `Err(ScoringError)` - 归一化后的失败
    async fn analyze(&self, url: &str) -> Result<ScoringReport, ScoringError>;

    /// 获取提供者名称
    fn name(&self) -> &'static str;
}

/// 校验分析目标URL
///
/// 要求非空且为带scheme的绝对URL；相对引用（如 "example.com"）
/// 一律拒绝，此时不允许发起任何网络调用。
pub fn validate_target_url(url: &str) -> Result<Url, ScoringError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ScoringError::InvalidInput(
            "Missing URL to analyze".to_string(),
        ));
    }
    Url::parse(trimmed).map_err(|_| {
        ScoringError::InvalidInput(
            "Invalid URL. Make sure to include http:// or https://".to_string(),
        )
    })
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
