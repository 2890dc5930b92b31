// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! WordNet-style noun lemmatizer
//!
//! Tokens are reduced with the WordNet noun morphology: an exception list
//! of irregular plurals first, then suffix detachment rules applied until a
//! form exists in the noun lexicon. No part-of-speech tag is ever supplied,
//! so verbs and adjectives are treated as nouns and usually pass through
//! unchanged.
//!
//! The lexicon is a WordNet dictionary installed on the host (NLTK's
//! `corpora/wordnet` or a system `wordnet` directory). There is no built-in
//! fallback lexicon.

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a WordNet dictionary directory
pub const WORDNET_DIR_ENV: &str = "WORDNET_DIR";

/// Directories searched for an NLTK data root after `NLTK_DATA` and
/// `~/nltk_data`
const NLTK_DATA_ROOTS: [&str; 4] = [
    "/usr/share/nltk_data",
    "/usr/local/share/nltk_data",
    "/usr/lib/nltk_data",
    "/usr/local/lib/nltk_data",
];

/// System WordNet installs (the `wordnet-base` package layout)
const SYSTEM_WORDNET_DIRS: [&str; 2] = ["/usr/share/wordnet", "/usr/local/share/wordnet"];

/// Noun detachment rules (suffix, replacement), tried in this order
const NOUN_RULES: [(&str, &str); 9] = [
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Deterministic noun lemmatizer backed by read-only lexicon data
#[derive(Clone)]
pub struct Lemmatizer {
    /// Known noun lemmas
    lexicon: HashSet<String>,
    /// Irregular form -> base forms
    exceptions: HashMap<String, Vec<String>>,
}

impl std::fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatizer")
            .field("lexicon_count", &self.lexicon.len())
            .field("exception_count", &self.exceptions.len())
            .finish()
    }
}

impl Lemmatizer {
    /// Locate an installed WordNet dictionary and load it.
    ///
    /// `$WORDNET_DIR` wins when set. Otherwise the NLTK data path is
    /// searched (`$NLTK_DATA`, `~/nltk_data`, the system roots) for
    /// `corpora/wordnet`, then the system WordNet directories. Nothing is
    /// substituted when no dictionary is found.
    pub fn discover() -> Result<Self> {
        let dir = locate_wordnet(
            std::env::var_os(WORDNET_DIR_ENV),
            nltk_data_roots(std::env::var_os("NLTK_DATA"), std::env::var_os("HOME")),
        )?;
        Self::from_wordnet_dir(&dir)
    }

    /// Load `index.noun` and `noun.exc` from a WordNet dictionary directory
    pub fn from_wordnet_dir(dir: &Path) -> Result<Self> {
        let index_path = dir.join("index.noun");
        let exc_path = dir.join("noun.exc");

        let index = std::fs::read_to_string(&index_path)
            .map_err(|e| Error::resource(&index_path, e))?;
        let exceptions =
            std::fs::read_to_string(&exc_path).map_err(|e| Error::resource(&exc_path, e))?;

        let lemmatizer =
            Self::from_sources(&index, &exceptions).map_err(|e| Error::resource(dir, e))?;
        log::info!("Loaded WordNet noun data from {}: {:?}", dir.display(), lemmatizer);
        Ok(lemmatizer)
    }

    /// Parse lexicon and exception data from their text layouts
    pub fn from_sources(index: &str, exceptions: &str) -> Result<Self> {
        let lexicon: HashSet<String> = index
            .lines()
            .filter(|line| !line.starts_with(' '))
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect();

        if lexicon.is_empty() {
            return Err(Error::Resource("noun lexicon is empty".to_string()));
        }

        let mut exception_map: HashMap<String, Vec<String>> = HashMap::new();
        for line in exceptions.lines() {
            let mut fields = line.split_whitespace();
            if let Some(inflected) = fields.next() {
                exception_map
                    .entry(inflected.to_string())
                    .or_default()
                    .extend(fields.map(str::to_string));
            }
        }

        Ok(Self {
            lexicon,
            exceptions: exception_map,
        })
    }

    /// Reduce a token to its noun lemma, or return it unchanged
    pub fn lemmatize(&self, token: &str) -> String {
        let candidates = self.morphy(token);
        // Shortest candidate wins; min_by_key keeps the first on ties
        candidates
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| token.to_string())
    }

    /// All lexicon forms reachable from the token, in discovery order
    fn morphy(&self, token: &str) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(token) {
            let forms = std::iter::once(token.to_string()).chain(bases.iter().cloned());
            return self.known_forms(forms);
        }

        let mut forms = apply_rules(&[token.to_string()]);
        let found = self.known_forms(std::iter::once(token.to_string()).chain(forms.clone()));
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms);
            let found = self.known_forms(forms.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    fn known_forms(&self, forms: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .into_iter()
            .filter(|form| self.lexicon.contains(form) && seen.insert(form.clone()))
            .collect()
    }
}

fn nltk_data_roots(nltk_data: Option<OsString>, home: Option<OsString>) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = nltk_data
        .map(|value| std::env::split_paths(&value).collect())
        .unwrap_or_default();
    if let Some(home) = home {
        roots.push(PathBuf::from(home).join("nltk_data"));
    }
    roots.extend(NLTK_DATA_ROOTS.iter().map(PathBuf::from));
    roots
}

/// Pick the WordNet directory to load. An explicit directory is returned
/// as-is so that a bad path fails loudly instead of falling through.
fn locate_wordnet(explicit: Option<OsString>, nltk_roots: Vec<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(PathBuf::from(dir));
    }

    let candidates: Vec<PathBuf> = nltk_roots
        .into_iter()
        .map(|root| root.join("corpora").join("wordnet"))
        .chain(SYSTEM_WORDNET_DIRS.iter().map(PathBuf::from))
        .collect();

    match candidates.iter().find(|dir| dir.join("index.noun").is_file()) {
        Some(dir) => Ok(dir.clone()),
        None => Err(Error::Resource(format!(
            "WordNet dictionary not found; set {} or configure a WordNet directory (searched {})",
            WORDNET_DIR_ENV,
            candidates
                .iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

fn apply_rules(forms: &[String]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            NOUN_RULES.iter().filter_map(move |(suffix, replacement)| {
                form.strip_suffix(suffix)
                    .map(|stem| format!("{}{}", stem, replacement))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::wordnet_fixture;

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::from_wordnet_dir(&wordnet_fixture()).unwrap()
    }

    #[test]
    fn test_regular_plurals() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("videos"), "video");
        assert_eq!(lem.lemmatize("comments"), "comment");
        assert_eq!(lem.lemmatize("subscribers"), "subscriber");
        assert_eq!(lem.lemmatize("boxes"), "box");
        assert_eq!(lem.lemmatize("churches"), "church");
        assert_eq!(lem.lemmatize("wishes"), "wish");
        assert_eq!(lem.lemmatize("stories"), "story");
        assert_eq!(lem.lemmatize("classes"), "class");
    }

    #[test]
    fn test_ves_and_men_rules() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("wolves"), "wolf");
        assert_eq!(lem.lemmatize("leaves"), "leaf");
        assert_eq!(lem.lemmatize("women"), "woman");
    }

    #[test]
    fn test_exceptions() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("children"), "child");
        assert_eq!(lem.lemmatize("teeth"), "tooth");
        assert_eq!(lem.lemmatize("knives"), "knife");
        assert_eq!(lem.lemmatize("lives"), "life");
        assert_eq!(lem.lemmatize("oxen"), "ox");
    }

    #[test]
    fn test_shortest_candidate_wins() {
        let lem = lemmatizer();
        // Both "glasses" and "glass" are lemmas
        assert_eq!(lem.lemmatize("glasses"), "glass");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("running"), "running");
        assert_eq!(lem.lemmatize("good,"), "good,");
        assert_eq!(lem.lemmatize("didnt"), "didnt");
        assert_eq!(lem.lemmatize("amazing!!work"), "amazing!!work");
        assert_eq!(lem.lemmatize(""), "");
    }

    #[test]
    fn test_noun_default_quirks() {
        let lem = lemmatizer();
        // Verb forms are read as noun plurals when the stem is a noun
        assert_eq!(lem.lemmatize("was"), "wa");
        assert_eq!(lem.lemmatize("hates"), "hate");
        assert_eq!(lem.lemmatize("ds"), "d");
    }

    #[test]
    fn test_known_lemma_is_stable() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("video"), "video");
        assert_eq!(lem.lemmatize("news"), "news");
    }

    #[test]
    fn test_from_sources_skips_header() {
        let index = "  1 license text\n  2 more text\ncat n 1 1 @ 1 0 02121620\n";
        let lem = Lemmatizer::from_sources(index, "").unwrap();
        assert_eq!(lem.lexicon.len(), 1);
        assert_eq!(lem.lemmatize("cats"), "cat");
    }

    #[test]
    fn test_empty_lexicon_is_fatal() {
        let result = Lemmatizer::from_sources("  1 header only\n", "");
        assert!(matches!(result, Err(Error::Resource(_))));
    }

    #[test]
    fn test_missing_wordnet_dir_is_fatal() {
        let result = Lemmatizer::from_wordnet_dir(Path::new("/nonexistent/wordnet"));
        assert!(matches!(result, Err(Error::Resource(_))));
    }

    #[test]
    fn test_wordnet_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.noun"), "goose n\nmouse n\n").unwrap();
        std::fs::write(dir.path().join("noun.exc"), "geese goose\nmice mouse\n").unwrap();

        let lem = Lemmatizer::from_wordnet_dir(dir.path()).unwrap();
        assert_eq!(lem.lemmatize("geese"), "goose");
        assert_eq!(lem.lemmatize("mice"), "mouse");
        assert_eq!(lem.lemmatize("videos"), "videos");
    }

    #[test]
    fn test_explicit_dir_is_used_verbatim() {
        let dir = locate_wordnet(Some("/opt/wordnet".into()), Vec::new()).unwrap();
        assert_eq!(dir, PathBuf::from("/opt/wordnet"));
    }

    #[test]
    fn test_locate_in_nltk_data_root() {
        let root = tempfile::tempdir().unwrap();
        let wordnet = root.path().join("corpora").join("wordnet");
        std::fs::create_dir_all(&wordnet).unwrap();
        std::fs::write(wordnet.join("index.noun"), "cat n\n").unwrap();

        let empty = tempfile::tempdir().unwrap();
        let roots = vec![empty.path().to_path_buf(), root.path().to_path_buf()];
        assert_eq!(locate_wordnet(None, roots).unwrap(), wordnet);
    }

    #[test]
    fn test_nltk_data_roots_order() {
        let roots = nltk_data_roots(Some("/a:/b".into()), Some("/home/user".into()));
        assert_eq!(roots[0], PathBuf::from("/a"));
        assert_eq!(roots[1], PathBuf::from("/b"));
        assert_eq!(roots[2], PathBuf::from("/home/user/nltk_data"));
        assert_eq!(roots.len(), 2 + 1 + NLTK_DATA_ROOTS.len());
    }

    #[test]
    fn test_missing_dictionary_names_the_fix() {
        let empty = tempfile::tempdir().unwrap();
        if SYSTEM_WORDNET_DIRS
            .iter()
            .any(|dir| Path::new(dir).join("index.noun").is_file())
        {
            // A system dictionary would be found; nothing to assert
            return;
        }
        let err = locate_wordnet(None, vec![empty.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, Error::Resource(_)));
        assert!(err.to_string().contains(WORDNET_DIR_ENV));
    }
}
