// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for CommentLens

use colored::Colorize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use super::commands::{OutputFormat, ResourceArgs};
use super::output::ReportFormatter;
use commentlens::{
    Analyzer, AppConfig, Error, JsonLinesSource, LinearModel, NormalizerConfig, TextNormalizer,
};

/// Handle the analyze command
///
/// Progress and warnings go to stderr so that JSON and CSV output on stdout
/// stays machine-readable.
pub fn handle_analyze(
    export: PathBuf,
    limit: Option<u16>,
    model: Option<PathBuf>,
    config: Option<PathBuf>,
    resources: ResourceArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app_config = match config {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::default(),
    };
    if let Some(limit) = limit {
        app_config.analysis.max_comments = limit as usize;
    }
    apply_resources(&mut app_config.normalizer, resources);

    let normalizer = TextNormalizer::with_config(&app_config.normalizer)?;
    let classifier = match model {
        Some(path) => LinearModel::from_file(&path)?,
        None => LinearModel::builtin()?,
    };
    let analyzer = Analyzer::new(normalizer, Arc::new(classifier), app_config.analysis)?;

    eprintln!(
        "{}",
        format!("Fetching comments from {}...", export.display()).cyan()
    );
    let identifier = export.to_string_lossy();
    let analysis = match analyzer.analyze(&JsonLinesSource::new(), &identifier) {
        Ok(analysis) => analysis,
        Err(Error::NoComments { identifier, cause }) => {
            if let Some(cause) = &cause {
                eprintln!("{}", format!("Warning: {}", cause).yellow());
            }
            eprintln!(
                "{}",
                "No comments fetched. Try another export or check that it is not empty.".yellow()
            );
            return Err(Error::NoComments { identifier, cause }.into());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(warning) = &analysis.warning {
        eprintln!(
            "{}",
            format!(
                "Warning: {} (report covers the {} comments read before the failure)",
                warning,
                analysis.comments.len()
            )
            .yellow()
        );
    }
    eprintln!(
        "{}",
        format!("Analyzed {} comments", analysis.comments.len())
            .bold()
            .green()
    );

    let output = ReportFormatter::format(&analysis, format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the normalize command
pub fn handle_normalize(
    texts: Vec<String>,
    trace: bool,
    resources: ResourceArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NormalizerConfig::default();
    apply_resources(&mut config, resources);
    let normalizer = TextNormalizer::with_config(&config)?;

    let texts = if texts.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        texts
    };

    for text in &texts {
        if trace {
            println!("{}", format!("{:?}", text).bold());
            for output in normalizer.trace(text) {
                println!("  {:<18} {:?}", output.stage.name(), output.text);
            }
        } else {
            println!("{}", normalizer.normalize(text));
        }
    }
    Ok(())
}

/// Handle the version command
pub fn handle_version() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "CommentLens".bold().green());
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Sentiment analysis of video comments");
    Ok(())
}

fn apply_resources(config: &mut NormalizerConfig, resources: ResourceArgs) {
    if resources.stopwords.is_some() {
        config.stopwords = resources.stopwords;
    }
    if resources.wordnet.is_some() {
        config.wordnet_dir = resources.wordnet;
    }
}
