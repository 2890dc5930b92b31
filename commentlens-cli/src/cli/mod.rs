// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for CommentLens
//!
//! Provides comment export analysis with table, JSON and CSV reports, and
//! a normalize command for inspecting the text pipeline.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_analyze, handle_normalize, handle_version};
