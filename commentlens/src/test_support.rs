// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Shared helpers for unit tests

use crate::config::NormalizerConfig;
use crate::text::TextNormalizer;
use std::path::PathBuf;

/// WordNet-layout subset checked into `tests/fixtures/wordnet`
pub(crate) fn wordnet_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("wordnet")
}

/// NLTK stopwords with the fixture lexicon
pub(crate) fn fixture_normalizer() -> TextNormalizer {
    TextNormalizer::with_config(&NormalizerConfig {
        stopwords: None,
        wordnet_dir: Some(wordnet_fixture()),
    })
    .unwrap()
}
