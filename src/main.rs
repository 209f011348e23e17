// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use speedrs::config::settings::Settings;
use speedrs::domain::repositories::contact_repository::ContactRepository;
use speedrs::domain::scoring::ScoringProvider;
use speedrs::infrastructure::database::connection;
use speedrs::infrastructure::pagespeed::client::PageSpeedClient;
use speedrs::infrastructure::repositories::contact_repo_impl::ContactRepositoryImpl;
use speedrs::presentation::routes;
use speedrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting speedrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");
    if settings.pagespeed.api_key.as_deref().unwrap_or("").is_empty() {
        // Analysis requests will answer 500 until a key is supplied
        warn!("pagespeed.api_key is not configured");
    }

    // 3. Connect to the contact store
    let pool = connection::create_pool(&settings.database).await?;
    connection::ensure_schema(&pool).await?;
    info!("Database connection established");

    // 4. Initialize components
    let provider: Arc<dyn ScoringProvider> = Arc::new(PageSpeedClient::new(&settings.pagespeed)?);
    let contacts: Arc<dyn ContactRepository> = Arc::new(ContactRepositoryImpl::new(pool));

    // 5. Start HTTP server
    let app = routes::routes(provider, contacts);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
