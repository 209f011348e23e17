// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PageSpeedSettings;
use crate::domain::models::report::ScoringReport;
use crate::domain::scoring::{validate_target_url, ScoringError, ScoringProvider};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// PageSpeed Insights 客户端
///
/// 基于reqwest实现的评分提供者。每次分析发起且仅发起一次
/// 出站调用，固定使用配置的分析策略，不做重试。
pub struct PageSpeedClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    strategy: String,
}

impl PageSpeedClient {
    /// 创建新的客户端实例
    ///
    /// # 参数
    ///
    /// * `settings` - 评分API配置
    ///
    /// # 返回值
    ///
    /// * `Ok(PageSpeedClient)` - 客户端实例
    /// * `Err(anyhow::Error)` - HTTP客户端构建失败
    pub fn new(settings: &PageSpeedSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("speedrs/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            strategy: settings.strategy.clone(),
        })
    }

    /// 从上游错误响应体中提取错误消息
    ///
    /// 上游以 {"error": {"message": ...}} 的形式报告错误；
    /// 无法解析时退回通用消息。
    fn upstream_message(body: Option<serde_json::Value>) -> String {
        body.as_ref()
            .and_then(|v| v.pointer("/error/message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| "Failed to fetch data from the scoring service".to_string())
    }
}

#[async_trait]
impl ScoringProvider for PageSpeedClient {
    async fn analyze(&self, url: &str) -> Result<ScoringReport, ScoringError> {
        let target = validate_target_url(url)?;

        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ScoringError::Configuration)?;

        debug!(url = %target, strategy = %self.strategy, "requesting scoring report");

        // Single attempt; a retry is a new user action
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("url", target.as_str()),
                ("key", api_key),
                ("strategy", self.strategy.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ScoringError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<serde_json::Value>().await.ok();
            let message = Self::upstream_message(body);
            warn!(status = status.as_u16(), %message, "scoring service rejected the request");
            return Err(ScoringError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ScoringReport>()
            .await
            .map_err(|e| ScoringError::Upstream {
                status: status.as_u16(),
                message: format!("malformed scoring report: {}", e),
            })
    }

    fn name(&self) -> &'static str {
        "pagespeed"
    }
}
