// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 联系人记录
///
/// 通过网站联系表单提交的一条用户记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 联系人姓名
    pub name: String,
    /// 联系人邮箱
    pub email: String,
    /// 可选的留言内容
    pub message: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// 创建新的联系人记录
    pub fn new(name: String, email: String, message: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}
