// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CommentLens command-line entry point

mod cli;

use clap::Parser;
use colored::Colorize;

use cli::{handle_analyze, handle_normalize, handle_version, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.level_filter())
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Version => handle_version(),
        Commands::Analyze {
            export,
            limit,
            model,
            config,
            resources,
            format,
        } => handle_analyze(export, limit, model, config, resources, format),
        Commands::Normalize {
            texts,
            trace,
            resources,
        } => handle_normalize(texts, trace, resources),
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
