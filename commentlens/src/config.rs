// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Configuration for normalization resources and report generation

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper bound on comments analyzed in one run
pub const MAX_COMMENTS_LIMIT: usize = 2000;

/// Where the normalizer loads its read-only resources from.
///
/// The preserved words are fixed and not configurable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Stopword corpus file; the NLTK English list when unset
    pub stopwords: Option<PathBuf>,
    /// WordNet dictionary directory with `index.noun` and `noun.exc`;
    /// discovered from `$WORDNET_DIR` and the NLTK data path when unset
    pub wordnet_dir: Option<PathBuf>,
}

/// Report sizing and fetch limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of comments pulled from the source
    pub max_comments: usize,
    /// Number of entries in the top keyword chart
    pub top_keywords: usize,
    /// Maximum number of words carried into the word cloud
    pub word_cloud_max_words: usize,
    /// Number of example comments shown per polarity
    pub extreme_examples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_comments: 500,
            top_keywords: 15,
            word_cloud_max_words: 200,
            extreme_examples: 5,
        }
    }
}

impl AnalysisConfig {
    /// Create with a custom comment limit
    pub fn with_max_comments(max_comments: usize) -> Self {
        Self {
            max_comments,
            ..Default::default()
        }
    }

    /// Reject limits the report cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.max_comments == 0 || self.max_comments > MAX_COMMENTS_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "max_comments must be between 1 and {}, got {}",
                MAX_COMMENTS_LIMIT, self.max_comments
            )));
        }
        if self.top_keywords == 0 {
            return Err(Error::InvalidConfig("top_keywords must be positive".to_string()));
        }
        if self.word_cloud_max_words == 0 {
            return Err(Error::InvalidConfig(
                "word_cloud_max_words must be positive".to_string(),
            ));
        }
        if self.extreme_examples == 0 {
            return Err(Error::InvalidConfig(
                "extreme_examples must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub normalizer: NormalizerConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.analysis.validate()?;
        log::debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
