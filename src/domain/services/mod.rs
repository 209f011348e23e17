// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含报告塑形的纯函数服务：
/// - 指标服务（metrics_service）：从评分报告中提取固定的关键指标行
/// - 建议服务（suggestion_service）：基于允许列表筛选可操作的改进建议
///
/// 两个服务都不产生副作用，同一份报告的输出是确定的。
pub mod metrics_service;
pub mod suggestion_service;
