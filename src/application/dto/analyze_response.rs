// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::{ScoreColor, ScoringReport};
use crate::domain::services::metrics_service::MetricRow;
use serde::Serialize;

/// 分析响应数据传输对象
///
/// 原样转发的评分报告，加上服务端派生的展示数据，
/// 调用方无需重复实现报告塑形逻辑。
#[derive(Debug, Serialize)]
pub struct AnalyzeResponseDto {
    /// 上游评分报告
    pub results: ScoringReport,
    /// 关键指标展示行
    pub metrics: Vec<MetricRow>,
    /// 改进建议列表
    pub suggestions: Vec<String>,
    /// 性能类别总分摘要
    pub performance: Option<CategorySummaryDto>,
}

/// 类别总分摘要
#[derive(Debug, Serialize)]
pub struct CategorySummaryDto {
    /// 0.0-1.0的类别总分
    pub score: f64,
    /// 颜色等级
    pub color: ScoreColor,
}
