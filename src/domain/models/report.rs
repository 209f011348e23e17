// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 评分报告
///
/// 评分API对单个页面的性能评估结果。报告在接收后不可变，
/// 一个报告只对应一次分析请求，不做跨请求的缓存或合并。
/// 所有字段均为可选，缺失的字段在后续处理中按"不适用"对待。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringReport {
    /// 被分析页面的规范化URL
    pub id: Option<String>,
    /// Lighthouse评估结果
    pub lighthouse_result: Option<LighthouseResult>,
}

/// Lighthouse评估结果
///
/// 包含按标识符索引的审计项集合和按名称索引的类别评分
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    /// 审计项映射，键为审计标识符
    #[serde(default)]
    pub audits: HashMap<String, AuditResult>,
    /// 类别映射，键为类别名称（如 performance）
    #[serde(default)]
    pub categories: HashMap<String, Category>,
}

/// 审计结果
///
/// 评分报告中的单个检查项。score缺失表示该审计不适用。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// 审计标识符
    pub id: Option<String>,
    /// 审计标题，用于向用户展示
    pub title: Option<String>,
    /// 审计描述
    pub description: Option<String>,
    /// 0.0-1.0的质量评分
    pub score: Option<f64>,
    /// 格式化后的显示值（如 "1.2 s"）
    pub display_value: Option<String>,
}

/// 类别评分
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// 类别标题
    pub title: Option<String>,
    /// 0.0-1.0的类别总分
    pub score: Option<f64>,
}

impl ScoringReport {
    /// 按标识符查找审计项
    pub fn audit(&self, id: &str) -> Option<&AuditResult> {
        self.lighthouse_result.as_ref()?.audits.get(id)
    }

    /// 按名称查找类别评分
    pub fn category_score(&self, name: &str) -> Option<f64> {
        self.lighthouse_result.as_ref()?.categories.get(name)?.score
    }
}

/// 评分颜色等级
///
/// 评分到颜色的唯一换算策略。类别总分和单项指标评分
/// 都通过 [`ScoreColor::from_score`] 换算，各渲染点不得
/// 自带阈值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    /// 良好（score >= 0.90）
    Good,
    /// 中等（0.50 <= score < 0.90）
    Medium,
    /// 较差（score < 0.50）
    Poor,
    /// 中性（score未定义）
    Neutral,
}

impl ScoreColor {
    /// 由评分换算颜色等级
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= 0.90 => ScoreColor::Good,
            Some(s) if s >= 0.50 => ScoreColor::Medium,
            Some(_) => ScoreColor::Poor,
            None => ScoreColor::Neutral,
        }
    }
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreColor::Good => write!(f, "good"),
            ScoreColor::Medium => write!(f, "medium"),
            ScoreColor::Poor => write!(f, "poor"),
            ScoreColor::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
