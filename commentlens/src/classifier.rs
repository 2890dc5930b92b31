// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Sentiment labels and the classifier seam
//!
//! The classifier consumes normalized comments and returns one label per
//! comment, aligned by position.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Built-in demonstration model
const BUILTIN_MODEL: &str = include_str!("../data/models/lexicon.json");

/// Word tokens of two or more word characters
static FEATURE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("feature token pattern is valid"));

/// Sentiment polarity; the integer values are the ones the model emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Report order
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Numeric value: -1, 0 or 1
    pub fn value(&self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        }
    }
}

impl TryFrom<i64> for SentimentLabel {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Positive),
            other => Err(Error::Classifier(format!(
                "label {} is outside {{-1, 0, 1}}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Predicts one sentiment label per normalized comment
pub trait Classifier: Send + Sync {
    /// Labels for `texts`, same length and order
    fn predict(&self, texts: &[String]) -> Result<Vec<SentimentLabel>>;
}

/// Bag-of-words linear model: score = bias + sum of token weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub bias: f64,
    /// Scores within `[-neutral_margin, neutral_margin]` are neutral
    #[serde(default)]
    pub neutral_margin: f64,
    pub weights: HashMap<String, f64>,
}

impl LinearModel {
    /// The lexicon model bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MODEL)
    }

    /// Load a model from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Classifier(format!("{}: {}", path.display(), e)))?;
        let model = Self::from_json(&content)?;
        log::info!(
            "Loaded model from {} ({} weights)",
            path.display(),
            model.weights.len()
        );
        Ok(model)
    }

    /// Parse a model from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let model: LinearModel = serde_json::from_str(json)?;
        if model.neutral_margin < 0.0 || !model.neutral_margin.is_finite() {
            return Err(Error::Classifier(format!(
                "neutral_margin must be a non-negative number, got {}",
                model.neutral_margin
            )));
        }
        Ok(model)
    }

    /// Raw decision score for one normalized comment
    pub fn score(&self, text: &str) -> f64 {
        FEATURE_TOKEN
            .find_iter(text)
            .filter_map(|m| self.weights.get(m.as_str()))
            .fold(self.bias, |acc, weight| acc + weight)
    }

    fn label_for(&self, score: f64) -> SentimentLabel {
        if score > self.neutral_margin {
            SentimentLabel::Positive
        } else if score < -self.neutral_margin {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl Classifier for LinearModel {
    fn predict(&self, texts: &[String]) -> Result<Vec<SentimentLabel>> {
        Ok(texts
            .iter()
            .map(|text| self.label_for(self.score(text)))
            .collect())
    }
}
