// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Comment text normalization: stopwords, lemmatization and the ordered
//! pipeline that feeds the classifier

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use normalizer::{Stage, StageOutput, TextNormalizer};
pub use stopwords::{StopwordSet, PRESERVED_WORDS};
