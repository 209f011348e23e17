// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分析请求数据传输对象
pub mod analyze_request;

/// 分析响应数据传输对象
pub mod analyze_response;

/// 联系人请求数据传输对象
pub mod contact_request;
