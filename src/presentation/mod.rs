// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 错误映射模块
pub mod errors;

/// 请求处理器模块
pub mod handlers;

/// 路由模块
pub mod routes;
