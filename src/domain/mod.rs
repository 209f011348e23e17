// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
pub mod models;

/// 领域仓库接口模块
pub mod repositories;

/// 评分提供者接口模块
pub mod scoring;

/// 领域服务模块
pub mod services;
