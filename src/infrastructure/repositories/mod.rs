// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 联系人仓库实现模块
pub mod contact_repo_impl;
