// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Comment normalizer: the feature-space contract of the classifier
//!
//! Every comment passes through the same ordered stages:
//!
//! 1. case fold
//! 2. trim surrounding whitespace
//! 3. replace `\n` with a space
//! 4. delete characters outside `[A-Za-z0-9]`, whitespace and `! ? . ,`
//! 5. drop stopwords (the preserved negators/contrastives stay)
//! 6. lemmatize each token as a noun
//!
//! Stage 4 deletes instead of replacing, so `amazing!!💯work` becomes the
//! single token `amazing!!work`. The classifier was trained on that output,
//! so the merge must be reproduced exactly.

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::text::lemmatizer::Lemmatizer;
use crate::text::stopwords::StopwordSet;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use std::sync::Arc;

/// Anything that is not an ASCII letter, ASCII digit, whitespace or `!?.,`.
/// U+001C..U+001F count as whitespace for splitting, so they survive here too.
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9\s\x1C-\x1F!?.,]").expect("character filter pattern is valid")
});

/// A single step of the normalization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    CaseFold,
    Trim,
    NewlineCollapse,
    CharacterFilter,
    StopwordRemoval,
    Lemmatization,
}

impl Stage {
    /// Pipeline order
    pub const ALL: [Stage; 6] = [
        Stage::CaseFold,
        Stage::Trim,
        Stage::NewlineCollapse,
        Stage::CharacterFilter,
        Stage::StopwordRemoval,
        Stage::Lemmatization,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaseFold => "case fold",
            Self::Trim => "trim",
            Self::NewlineCollapse => "newline collapse",
            Self::CharacterFilter => "character filter",
            Self::StopwordRemoval => "stopword removal",
            Self::Lemmatization => "lemmatization",
        }
    }
}

/// Output of one stage, as reported by [`TextNormalizer::trace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

/// Normalizes raw comments against immutable, shared resources
#[derive(Clone)]
pub struct TextNormalizer {
    stopwords: Arc<StopwordSet>,
    lemmatizer: Arc<Lemmatizer>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("stopwords_count", &self.stopwords.len())
            .field("lemmatizer", &self.lemmatizer)
            .finish()
    }
}

impl TextNormalizer {
    /// Normalizer over the NLTK English stopwords and the WordNet dictionary
    /// found by [`Lemmatizer::discover`]
    pub fn new() -> Result<Self> {
        Self::with_config(&NormalizerConfig::default())
    }

    /// Load resources as configured. Any missing resource is an error here,
    /// never a silent fallback.
    pub fn with_config(config: &NormalizerConfig) -> Result<Self> {
        let stopwords = match &config.stopwords {
            Some(path) => StopwordSet::from_file(path)?,
            None => StopwordSet::english()?,
        };
        let lemmatizer = match &config.wordnet_dir {
            Some(dir) => Lemmatizer::from_wordnet_dir(dir)?,
            None => Lemmatizer::discover()?,
        };

        let normalizer = Self::from_parts(stopwords, lemmatizer);
        log::info!("Initialized {:?}", normalizer);
        Ok(normalizer)
    }

    /// Assemble from already-loaded resources
    pub fn from_parts(stopwords: StopwordSet, lemmatizer: Lemmatizer) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            lemmatizer: Arc::new(lemmatizer),
        }
    }

    /// Run the full pipeline on one comment
    pub fn normalize(&self, raw: &str) -> String {
        Stage::ALL
            .iter()
            .fold(raw.to_string(), |text, stage| self.apply(*stage, &text))
    }

    /// Normalize many comments in parallel. Output `i` belongs to input `i`.
    pub fn normalize_batch(&self, raws: &[String]) -> Vec<String> {
        let normalized: Vec<String> = raws.par_iter().map(|raw| self.normalize(raw)).collect();
        log::debug!("Normalized batch of {} comments", normalized.len());
        normalized
    }

    /// Run the pipeline and keep every intermediate result
    pub fn trace(&self, raw: &str) -> Vec<StageOutput> {
        let mut text = raw.to_string();
        Stage::ALL
            .iter()
            .map(|stage| {
                text = self.apply(*stage, &text);
                StageOutput {
                    stage: *stage,
                    text: text.clone(),
                }
            })
            .collect()
    }

    /// Apply a single stage
    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::CaseFold => text.to_lowercase(),
            Stage::Trim => text.trim_matches(is_space).to_string(),
            Stage::NewlineCollapse => text.replace('\n', " "),
            Stage::CharacterFilter => DISALLOWED_CHARS.replace_all(text, "").into_owned(),
            Stage::StopwordRemoval => join_tokens(
                tokens(text).filter(|token| !self.stopwords.contains(token)),
            ),
            Stage::Lemmatization => join_tokens(
                tokens(text).map(|token| self.lemmatizer.lemmatize(token)),
            ),
        }
    }

    /// Stopwords in effect for this normalizer
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Lemmatizer in effect for this normalizer
    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

/// Whitespace as the tokenizer sees it: Unicode White_Space plus the ASCII
/// file/group/record/unit separators.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|token| !token.is_empty())
}

fn join_tokens<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for token in tokens {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(token.as_ref());
    }
    joined
}
