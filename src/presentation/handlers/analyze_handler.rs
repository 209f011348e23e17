// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::debug;

use crate::application::dto::analyze_request::AnalyzeRequestDto;
use crate::application::dto::analyze_response::{AnalyzeResponseDto, CategorySummaryDto};
use crate::domain::models::report::ScoreColor;
use crate::domain::scoring::ScoringProvider;
use crate::domain::services::metrics_service::extract_metrics;
use crate::domain::services::suggestion_service::{failing_audits, select_suggestions};
use crate::presentation::errors::ApiError;

/// 分析目标页面的性能
///
/// 把请求转发给评分提供者，返回原始报告和服务端派生的
/// 指标行、建议列表与性能总分摘要。URL缺失或非法映射为
/// 400；凭证缺失映射为500；上游错误原样转发其状态码。
pub async fn analyze(
    Extension(provider): Extension<Arc<dyn ScoringProvider>>,
    Json(payload): Json<AnalyzeRequestDto>,
) -> Result<Json<AnalyzeResponseDto>, ApiError> {
    let url = payload.url.unwrap_or_default();
    let report = provider.analyze(&url).await?;

    // Generic sub-threshold scan stays server-side; only the curated
    // allow-list reaches the user
    let failing = failing_audits(&report);
    debug!(
        url = %url,
        provider = provider.name(),
        failing = failing.len(),
        "scoring report received"
    );

    let metrics = extract_metrics(&report);
    let suggestions = select_suggestions(&report);
    let performance = report
        .category_score("performance")
        .map(|score| CategorySummaryDto {
            score,
            color: ScoreColor::from_score(Some(score)),
        });

    Ok(Json(AnalyzeResponseDto {
        results: report,
        metrics,
        suggestions,
        performance,
    }))
}
