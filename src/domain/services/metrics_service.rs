// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::{ScoreColor, ScoringReport};
use serde::Serialize;

/// 关键指标审计项及其展示标签，按展示顺序排列
const KEY_METRICS: &[(&str, &str)] = &[
    ("first-contentful-paint", "First Contentful Paint (FCP)"),
    ("largest-contentful-paint", "Largest Contentful Paint (LCP)"),
    ("cumulative-layout-shift", "Cumulative Layout Shift (CLS)"),
    ("interactive", "Time to Interactive (TTI)"),
    ("speed-index", "Speed Index"),
    ("total-blocking-time", "Total Blocking Time (TBT)"),
];

/// 指标展示行
///
/// 单个关键指标的展示数据：标签、格式化值和颜色等级
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricRow {
    /// 审计标识符
    pub id: String,
    /// 展示标签
    pub label: String,
    /// 格式化后的显示值
    pub display_value: Option<String>,
    /// 颜色等级
    pub color: ScoreColor,
}

/// 从评分报告中提取关键指标
///
/// 对固定的关键指标列表逐项查找报告中的审计结果；
/// 报告中缺失的指标直接跳过，不产生占位行。
pub fn extract_metrics(report: &ScoringReport) -> Vec<MetricRow> {
    KEY_METRICS
        .iter()
        .filter_map(|(id, label)| {
            let audit = report.audit(id)?;
            Some(MetricRow {
                id: (*id).to_string(),
                label: (*label).to_string(),
                display_value: audit.display_value.clone(),
                color: ScoreColor::from_score(audit.score),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "metrics_service_test.rs"]
mod tests;
