// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建联系人请求数据传输对象
///
/// 必填字段用 Option 建模，缺失在校验阶段映射为 400，
/// 而不是反序列化阶段的 422。
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateContactDto {
    /// 联系人姓名，必填
    #[validate(required(message = "name is required"), length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    /// 联系人邮箱，必填且需为合法邮箱
    #[validate(required(message = "email is required"), email(message = "email is invalid"))]
    pub email: Option<String>,
    /// 可选的留言内容
    pub message: Option<String>,
}
