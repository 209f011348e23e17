// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use serde_json::{json, Value};
use speedrs::config::settings::{DatabaseSettings, PageSpeedSettings};
use speedrs::domain::repositories::contact_repository::ContactRepository;
use speedrs::domain::scoring::ScoringProvider;
use speedrs::infrastructure::database::connection;
use speedrs::infrastructure::pagespeed::client::PageSpeedClient;
use speedrs::infrastructure::repositories::contact_repo_impl::ContactRepositoryImpl;
use speedrs::presentation::routes;
use std::sync::Arc;

/// 构造指向指定端点的评分API测试配置
pub fn pagespeed_settings(endpoint: &str, api_key: Option<&str>) -> PageSpeedSettings {
    PageSpeedSettings {
        api_key: api_key.map(str::to_string),
        endpoint: endpoint.to_string(),
        strategy: "desktop".to_string(),
        timeout_secs: 5,
    }
}

/// 启动一个完整应用的测试服务器
///
/// 联系人存储使用单连接的内存SQLite
pub async fn spawn_server(pagespeed: &PageSpeedSettings) -> TestServer {
    let provider: Arc<dyn ScoringProvider> = Arc::new(PageSpeedClient::new(pagespeed).unwrap());

    let database = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        // In-memory SQLite is per-connection
        max_connections: Some(1),
    };
    let pool = connection::create_pool(&database).await.unwrap();
    connection::ensure_schema(&pool).await.unwrap();
    let contacts: Arc<dyn ContactRepository> = Arc::new(ContactRepositoryImpl::new(pool));

    TestServer::new(routes::routes(provider, contacts)).unwrap()
}

/// 一份带有未通过审计和性能总分的样例评分报告
pub fn sample_report_body() -> Value {
    json!({
        "id": "https://example.com/",
        "lighthouseResult": {
            "audits": {
                "first-contentful-paint": {
                    "id": "first-contentful-paint",
                    "title": "First Contentful Paint",
                    "description": "Marks the time at which the first text or image is painted.",
                    "score": 0.72,
                    "displayValue": "1.8 s"
                },
                "uses-text-compression": {
                    "id": "uses-text-compression",
                    "title": "Enable text compression",
                    "description": "Text-based resources should be served with compression.",
                    "score": 0.2,
                    "displayValue": "Potential savings of 120 KiB"
                }
            },
            "categories": {
                "performance": { "title": "Performance", "score": 0.95 }
            }
        }
    })
}
