// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::ScoringReport;

/// 建议的评分阈值，低于该值的审计视为未通过
const SUGGESTION_SCORE_THRESHOLD: f64 = 0.90;

/// 常见未通过审计的允许列表，按优先级排列
///
/// 只有这份精选列表里的审计会被转成面向用户的建议。
/// 通用的"所有低分审计"扫描会把大量纯信息性的诊断项
/// 也暴露出来，对用户没有可操作性，所以不对外呈现
/// （见 [`failing_audits`]）。
pub const COMMON_FAILING_AUDITS: &[&str] = &[
    "server-response-time",
    "uses-text-compression",
    "unminified-css",
    "unminified-javascript",
    "uses-optimized-images",
    "offscreen-images",
    "uses-long-cache-ttl",
    "mainthread-work-breakdown",
    "total-blocking-time",
    "max-potential-fid",
    "render-blocking-resources",
    "unused-css-rules",
    "unused-javascript",
    "viewport",
    "legacy-javascript",
];

/// 从评分报告中筛选改进建议
///
/// 按允许列表顺序收集未通过审计的标题，相同标题只保留
/// 首次出现的一条。只有报告里存在、评分已定义且低于阈值、
/// 标题非空的审计才会入选。
pub fn select_suggestions(report: &ScoringReport) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    for audit_id in COMMON_FAILING_AUDITS {
        let Some(audit) = report.audit(audit_id) else {
            continue;
        };
        let Some(score) = audit.score else {
            continue;
        };
        if score >= SUGGESTION_SCORE_THRESHOLD {
            continue;
        }
        let Some(title) = audit.title.as_deref() else {
            continue;
        };
        if title.is_empty() {
            continue;
        }
        // Dedupe by exact string equality, first occurrence wins
        if !suggestions.iter().any(|s| s == title) {
            suggestions.push(title.to_string());
        }
    }

    suggestions
}

/// 扫描报告中所有未通过的审计
///
/// 通用扫描：所有评分已定义且低于阈值、带标题和描述的审计，
/// 排除标识符中含 metrics / diagnostics 的纯信息项。结果只
/// 用于服务端诊断日志，不对用户呈现。
pub fn failing_audits(report: &ScoringReport) -> Vec<String> {
    let Some(lighthouse) = report.lighthouse_result.as_ref() else {
        return Vec::new();
    };

    let mut failing: Vec<String> = lighthouse
        .audits
        .iter()
        .filter(|(id, audit)| {
            !id.contains("metrics")
                && !id.contains("diagnostics")
                && audit.score.is_some_and(|s| s < SUGGESTION_SCORE_THRESHOLD)
                && audit.title.as_deref().is_some_and(|t| !t.is_empty())
                && audit.description.is_some()
        })
        .map(|(id, _)| id.clone())
        .collect();
    failing.sort();
    failing
}

#[cfg(test)]
#[path = "suggestion_service_test.rs"]
mod tests;
