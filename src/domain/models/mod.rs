// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 联系人记录模型
pub mod contact;

/// 评分报告模型
pub mod report;
