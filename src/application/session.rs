// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::ScoringReport;
use crate::domain::scoring::{validate_target_url, ScoringError, ScoringProvider};

/// 分析会话状态
///
/// 一次分析请求的生命周期：
/// Idle → Loading → Success / Error，Success 和 Error 再次提交
/// 时立即回到 Loading（上一次的结果或错误在提交时清除，
/// 而不是等响应到达）。无效输入不离开 Idle，只记录本地校验
/// 错误，且不发起任何网络调用。
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    /// 空闲，可能带有上一次提交的本地校验错误
    Idle { validation_error: Option<String> },
    /// 请求已发出，等待评分结果
    Loading,
    /// 分析成功，持有评分报告
    Success(ScoringReport),
    /// 分析失败，持有面向用户的错误消息
    Error(String),
}

/// 已接受的提交凭据
///
/// 携带经过校验的目标URL和本次提交的代号。完成回调必须
/// 带回同一个代号；代号过期的完成会被丢弃，保证慢响应
/// 不会覆盖更新的提交。
#[derive(Debug, Clone)]
pub struct Submission {
    /// 提交代号，单调递增
    pub generation: u64,
    /// 经过校验的目标URL
    pub url: String,
}

/// 分析会话
///
/// 单个分析会话的状态容器。同一时刻只有一个有意义的在途
/// 请求；每次成功提交使代号递增，旧请求的完成不再生效。
#[derive(Debug)]
pub struct AnalysisSession {
    state: AnalysisState,
    generation: u64,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    /// 创建新的空闲会话
    pub fn new() -> Self {
        Self {
            state: AnalysisState::Idle {
                validation_error: None,
            },
            generation: 0,
        }
    }

    /// 当前状态
    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// 是否有请求在途
    pub fn is_loading(&self) -> bool {
        matches!(self.state, AnalysisState::Loading)
    }

    /// 提交一个分析目标
    ///
    /// 合法URL使会话进入 Loading 并返回提交凭据；非法URL
    /// 回到带校验错误的 Idle 并返回 None，调用方此时不得
    /// 发起网络调用。Loading 期间的再次提交同样会被接受并
    /// 使旧请求的代号过期（UI 应禁用重复提交，但状态机
    /// 自身对过期响应免疫）。
    pub fn submit(&mut self, url: &str) -> Option<Submission> {
        match validate_target_url(url) {
            Ok(target) => {
                // Previous result or error is cleared now, not on response
                self.state = AnalysisState::Loading;
                self.generation += 1;
                Some(Submission {
                    generation: self.generation,
                    url: target.into(),
                })
            }
            Err(e) => {
                self.state = AnalysisState::Idle {
                    validation_error: Some(e.to_string()),
                };
                None
            }
        }
    }

    /// 记录一次成功完成
    ///
    /// 代号过期的完成被丢弃，返回 false
    pub fn complete_ok(&mut self, submission: &Submission, report: ScoringReport) -> bool {
        if submission.generation != self.generation {
            return false;
        }
        self.state = AnalysisState::Success(report);
        true
    }

    /// 记录一次失败完成
    ///
    /// 代号过期的完成被丢弃，返回 false
    pub fn complete_err(&mut self, submission: &Submission, error: &ScoringError) -> bool {
        if submission.generation != self.generation {
            return false;
        }
        self.state = AnalysisState::Error(error.to_string());
        true
    }

    /// 执行一轮完整的提交与完成
    ///
    /// 提交URL，等待提供者的响应并把结果写回会话，返回
    /// 写回后的状态。校验失败时直接返回 Idle 状态，不触碰
    /// 提供者。
    pub async fn analyze_url<P: ScoringProvider + ?Sized>(
        &mut self,
        provider: &P,
        url: &str,
    ) -> &AnalysisState {
        let Some(submission) = self.submit(url) else {
            return self.state();
        };
        match provider.analyze(&submission.url).await {
            Ok(report) => {
                self.complete_ok(&submission, report);
            }
            Err(e) => {
                self.complete_err(&submission, &e);
            }
        }
        self.state()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
