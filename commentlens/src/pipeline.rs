// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Analysis pipeline: fetch, normalize, classify, report
//!
//! The normalizer and classifier are injected at construction; the pipeline
//! keeps every comment paired with its normalized text and label.

use crate::classifier::{Classifier, SentimentLabel};
use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::report::SentimentReport;
use crate::source::{fetch_comments, CommentSource};
use crate::text::TextNormalizer;
use serde::Serialize;
use std::sync::Arc;

/// A comment with its derived normalized text and label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedComment {
    /// Position in fetch order
    pub index: usize,
    pub original: String,
    pub normalized: String,
    pub label: SentimentLabel,
}

impl AnalyzedComment {
    /// Length of the original comment in characters
    pub fn length(&self) -> usize {
        self.original.chars().count()
    }
}

/// Output of a full analysis run
#[derive(Debug)]
pub struct Analysis {
    pub comments: Vec<AnalyzedComment>,
    pub report: SentimentReport,
    /// Source failure that truncated the fetch; the report covers what was read
    pub warning: Option<Error>,
}

/// Runs comments through normalization and classification
pub struct Analyzer {
    normalizer: TextNormalizer,
    classifier: Arc<dyn Classifier>,
    config: AnalysisConfig,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("normalizer", &self.normalizer)
            .field("config", &self.config)
            .finish()
    }
}

impl Analyzer {
    /// Create an analyzer; the configuration is validated here
    pub fn new(
        normalizer: TextNormalizer,
        classifier: Arc<dyn Classifier>,
        config: AnalysisConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer,
            classifier,
            config,
        })
    }

    /// Normalize and label a batch of raw comments
    pub fn classify(&self, comments: Vec<String>) -> Result<Vec<AnalyzedComment>> {
        let normalized = self.normalizer.normalize_batch(&comments);
        let labels = self.classifier.predict(&normalized)?;

        if labels.len() != normalized.len() {
            return Err(Error::Classifier(format!(
                "expected {} labels, got {}",
                normalized.len(),
                labels.len()
            )));
        }

        Ok(comments
            .into_iter()
            .zip(normalized)
            .zip(labels)
            .enumerate()
            .map(|(index, ((original, normalized), label))| AnalyzedComment {
                index,
                original,
                normalized,
                label,
            })
            .collect())
    }

    /// Fetch comments for `identifier` and build the full report
    pub fn analyze<S>(&self, source: &S, identifier: &str) -> Result<Analysis>
    where
        S: CommentSource + ?Sized,
    {
        let outcome = fetch_comments(source, identifier, self.config.max_comments);
        if outcome.comments.is_empty() {
            return Err(Error::NoComments {
                identifier: identifier.to_string(),
                cause: outcome.error.map(Box::new),
            });
        }

        log::info!(
            "Running sentiment analysis on {} comments",
            outcome.comments.len()
        );
        let comments = self.classify(outcome.comments)?;
        let report = SentimentReport::build(&comments, &self.config);

        Ok(Analysis {
            comments,
            report,
            warning: outcome.error,
        })
    }
}
