// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::contact_repository::ContactRepository;
use crate::domain::scoring::ScoringProvider;
use crate::presentation::handlers::{analyze_handler, contact_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `provider` - 评分提供者
/// * `contacts` - 联系人仓库
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(provider: Arc<dyn ScoringProvider>, contacts: Arc<dyn ContactRepository>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        // Method routing answers non-POST with 405
        .route("/v1/analyze", post(analyze_handler::analyze))
        .route(
            "/v1/contacts",
            post(contact_handler::create_contact).get(contact_handler::list_contacts),
        )
        .layer(Extension(provider))
        .layer(Extension(contacts))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
