// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::repositories::contact_repository::RepositoryError;
use crate::domain::scoring::ScoringError;

/// 应用错误类型
///
/// 表示层的统一错误出口。每个失败都转换为带 {"error": ...}
/// 体的HTTP响应；不向用户暴露服务端细节的失败在这里记录
/// 日志后换成通用消息。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 评分调用失败
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    /// 请求体校验失败
    #[error("{0}")]
    Validation(String),
    /// 仓库操作失败
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Scoring(ScoringError::InvalidInput(message)) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::Scoring(ScoringError::Configuration) => {
                // Not user-correctable: log the real cause, show a generic message
                error!("scoring API credential is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error. The analysis service is unavailable.".to_string(),
                )
            }
            ApiError::Scoring(ScoringError::UpstreamUnavailable(cause)) => {
                error!(%cause, "scoring service unreachable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not reach the scoring service. Please try again.".to_string(),
                )
            }
            ApiError::Scoring(ScoringError::Upstream { status, message }) => (
                // Relay the upstream status code to the caller
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message.clone(),
            ),
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Repository(cause) => {
                error!(%cause, "repository operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
