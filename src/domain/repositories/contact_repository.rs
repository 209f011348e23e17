// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::contact::Contact;
use async_trait::async_trait;
use thiserror::Error;

/// 仓库错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 数据库操作失败
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// 存储的记录无法解析
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// 联系人仓库接口
///
/// 联系人记录的持久化契约，只提供创建和列表两个操作
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// 创建联系人记录
    async fn create(&self, contact: &Contact) -> Result<Contact, RepositoryError>;

    /// 列出所有联系人记录，按创建时间倒序
    async fn list(&self) -> Result<Vec<Contact>, RepositoryError>;
}
