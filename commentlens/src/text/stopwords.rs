// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Stopword set used by the comment normalizer
//!
//! The set is the NLTK English stopword corpus minus a small group of
//! sentiment-bearing words (negators and contrastives) that must reach the
//! classifier.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use stop_words::{get, LANGUAGE};

/// Words kept even though the corpus lists them as stopwords
pub const PRESERVED_WORDS: [&str; 5] = ["not", "but", "however", "no", "yet"];

/// Immutable stopword set with the preserved words already removed
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// NLTK English corpus minus [`PRESERVED_WORDS`]
    pub fn english() -> Result<Self> {
        Self::from_words(get(LANGUAGE::English).iter().map(|w| w.to_string()))
    }

    /// Load a stopword corpus file (one word per line), such as NLTK's
    /// `corpora/stopwords/english`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::resource(path, e))?;
        let set = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
        .map_err(|e| Error::resource(path, e))?;
        log::info!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    fn from_words<W, S>(words: W) -> Result<Self>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty() && !PRESERVED_WORDS.contains(&w.as_str()))
            .collect();

        if words.is_empty() {
            return Err(Error::Resource("stopword set is empty".to_string()));
        }

        Ok(Self { words })
    }

    /// Exact, case-sensitive membership check
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of active stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed set
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
