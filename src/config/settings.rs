// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、评分API和数据库等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 评分API配置
    pub pagespeed: PageSpeedSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 评分API配置设置
///
/// PageSpeed Insights 的凭证和请求参数。API密钥没有默认值，
/// 必须通过配置文件或环境变量提供；缺失时分析请求会以
/// 配置错误失败，而不是在启动时中止。
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpeedSettings {
    /// API密钥（服务端凭证，不对客户端暴露）
    pub api_key: Option<String>,
    /// 评分API端点
    pub endpoint: String,
    /// 分析策略（desktop或mobile）
    pub strategy: String,
    /// 出站请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default scoring API settings (key must come from file or env)
            .set_default(
                "pagespeed.endpoint",
                "https://www.googleapis.com/pagespeedonline/v5/runPagespeed",
            )?
            .set_default("pagespeed.strategy", "desktop")?
            .set_default("pagespeed.timeout_secs", 60)?
            // Default database settings
            .set_default("database.url", "sqlite:speedrs.db?mode=rwc")?
            .set_default("database.max_connections", 5)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SPEEDRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
