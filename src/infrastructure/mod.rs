// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
pub mod database;

/// 评分API客户端模块
pub mod pagespeed;

/// 仓库实现模块
pub mod repositories;
