// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::contact::Contact;
use crate::domain::repositories::contact_repository::{ContactRepository, RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{AnyPool, Row};
use uuid::Uuid;

/// 联系人仓库实现
///
/// 基于sqlx连接池的联系人记录持久化。id和时间戳以文本形式
/// 存储，保证SQLite与Postgres下行为一致。
pub struct ContactRepositoryImpl {
    pool: AnyPool,
}

impl ContactRepositoryImpl {
    /// 创建新的仓库实例
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// 把数据库行转换为领域模型
    fn row_to_contact(row: &sqlx::any::AnyRow) -> Result<Contact, RepositoryError> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        Ok(Contact {
            id: Uuid::parse_str(&id)
                .map_err(|e| RepositoryError::Corrupt(format!("contact id: {}", e)))?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            message: row.try_get("message")?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| RepositoryError::Corrupt(format!("contact created_at: {}", e)))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryImpl {
    async fn create(&self, contact: &Contact) -> Result<Contact, RepositoryError> {
        sqlx::query(
            "INSERT INTO contacts (id, name, email, message, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(contact.id.to_string())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(contact.message.clone())
        // Fixed-width UTC timestamps keep text ordering chronological
        .bind(contact.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await?;

        Ok(contact.clone())
    }

    async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, email, message, created_at
             FROM contacts
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_contact).collect()
    }
}
