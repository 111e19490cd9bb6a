// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports command modules for fastfood-cli
// ABOUTME: Provides access to the dataset query commands

pub mod query;
