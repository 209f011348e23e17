// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分析处理器模块
pub mod analyze_handler;

/// 联系人处理器模块
pub mod contact_handler;
