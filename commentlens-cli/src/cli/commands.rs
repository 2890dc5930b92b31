// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command definitions for CommentLens

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// CommentLens CLI - sentiment reports for video comments
#[derive(Parser)]
#[command(name = "commentlens")]
#[command(about = "CommentLens - Analyze Positive / Neutral / Negative sentiment of video comments")]
#[command(version)]
pub struct Cli {
    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level; warnings by default so source failures show up
    pub fn level_filter(&self) -> log::LevelFilter {
        if self.verbose {
            return log::LevelFilter::Debug;
        }
        self.log_level
            .map(LogLevel::to_level_filter)
            .unwrap_or(log::LevelFilter::Warn)
    }
}

/// Resource overrides shared by commands that normalize text
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// Stopword corpus file (one word per line) instead of the built-in list
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// WordNet dictionary directory containing index.noun and noun.exc;
    /// $WORDNET_DIR or the NLTK data path when omitted
    #[arg(long)]
    pub wordnet: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show detailed version information
    Version,

    /// Analyze the sentiment of an exported comment file
    Analyze {
        /// Comment export (JSON lines with a "text" field per comment)
        export: PathBuf,

        /// Maximum number of comments to analyze
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(100..=2000))]
        limit: Option<u16>,

        /// Sentiment model (JSON); the built-in lexicon model when omitted
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        resources: ResourceArgs,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Normalize text the way comments are normalized before classification
    Normalize {
        /// Texts to normalize; one comment per stdin line when omitted
        texts: Vec<String>,

        /// Show the output of every pipeline stage
        #[arg(short, long)]
        trace: bool,

        #[command(flatten)]
        resources: ResourceArgs,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
