// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CommentLens - sentiment distribution reports for video comments
//!
//! The heart of the crate is [`TextNormalizer`], the deterministic pipeline
//! that turns a raw comment into the text a sentiment classifier was trained
//! on. Around it sit the pieces needed for a full report:
//!
//! - [`source`] - comment sources (downloader exports, in-memory lists)
//! - [`classifier`] - the classifier seam and a bag-of-words model
//! - [`pipeline`] - fetch, normalize, classify, report
//! - [`report`] - overview, trend, keywords, word cloud, extremes, lengths
//!
//! [`TextNormalizer::new`] needs an installed WordNet dictionary (NLTK's
//! `corpora/wordnet`, or any directory named by `$WORDNET_DIR`).
//!
//! ```no_run
//! use commentlens::{Analyzer, AnalysisConfig, JsonLinesSource, LinearModel, TextNormalizer};
//! use std::sync::Arc;
//!
//! # fn main() -> commentlens::Result<()> {
//! let normalizer = TextNormalizer::new()?;
//! let model = Arc::new(LinearModel::builtin()?);
//! let analyzer = Analyzer::new(normalizer, model, AnalysisConfig::default())?;
//!
//! let analysis = analyzer.analyze(&JsonLinesSource::new(), "comments.jsonl")?;
//! println!("{:.2}% positive", analysis.report.overview.positive_pct);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use classifier::{Classifier, LinearModel, SentimentLabel};
pub use config::{AnalysisConfig, AppConfig, NormalizerConfig};
pub use error::{Error, Result};
pub use pipeline::{AnalyzedComment, Analysis, Analyzer};
pub use report::SentimentReport;
pub use source::{fetch_comments, CommentSource, FetchOutcome, JsonLinesSource, StaticSource};
pub use text::{Lemmatizer, Stage, StopwordSet, TextNormalizer};
