// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports helper modules for fastfood-cli
// ABOUTME: Provides access to display formatting utilities

pub mod display;
