// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

/// 创建数据库连接池
///
/// 根据连接URL选择驱动（SQLite用于开发和测试，Postgres
/// 用于生产部署）。
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(AnyPool)` - 连接池
/// * `Err(sqlx::Error)` - 连接失败
pub async fn create_pool(settings: &DatabaseSettings) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();
    AnyPoolOptions::new()
        .max_connections(settings.max_connections.unwrap_or(5))
        .connect(&settings.url)
        .await
}

/// 确保联系人表存在
///
/// 单表结构在启动时就地创建，不使用迁移框架。
pub async fn ensure_schema(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
