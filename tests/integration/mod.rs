// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod helpers;

mod analyze_api_test;
mod pagespeed_client_test;
