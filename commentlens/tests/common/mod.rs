// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Helpers shared by the integration tests

#![allow(dead_code)]

use commentlens::{NormalizerConfig, TextNormalizer};
use std::path::PathBuf;

/// WordNet-layout subset checked into `tests/fixtures/wordnet`
pub fn wordnet_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("wordnet")
}

pub fn fixture_config() -> NormalizerConfig {
    NormalizerConfig {
        stopwords: None,
        wordnet_dir: Some(wordnet_fixture()),
    }
}

/// NLTK stopwords with the fixture lexicon
pub fn fixture_normalizer() -> TextNormalizer {
    TextNormalizer::with_config(&fixture_config()).expect("fixture resources load")
}
