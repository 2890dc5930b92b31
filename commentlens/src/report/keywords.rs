// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Token frequency over normalized comments

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Words of at least two characters, apostrophes allowed after the first
static CLOUD_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w[\w']+").expect("word cloud pattern is valid"));

/// A token and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// A word-cloud entry; `weight` is relative to the most frequent word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub word: String,
    pub count: usize,
    pub weight: f64,
}

/// Frequency table that remembers first-occurrence order for ties
#[derive(Debug, Default)]
struct FrequencyTable<'a> {
    counts: HashMap<&'a str, (usize, usize)>,
}

impl<'a> FrequencyTable<'a> {
    fn add(&mut self, word: &'a str) {
        let next = self.counts.len();
        self.counts.entry(word).or_insert((0, next)).0 += 1;
    }

    /// Most frequent first; equal counts keep first-seen order
    fn most_common(self, n: usize) -> Vec<KeywordCount> {
        let mut entries: Vec<(&str, usize, usize)> = self
            .counts
            .into_iter()
            .map(|(word, (count, first_seen))| (word, count, first_seen))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries
            .into_iter()
            .take(n)
            .map(|(word, count, _)| KeywordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }
}

/// The `n` most frequent whitespace tokens across all texts
pub fn top_keywords<'a, I>(texts: I, n: usize) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = FrequencyTable::default();
    for text in texts {
        for word in text.split_whitespace() {
            table.add(word);
        }
    }
    table.most_common(n)
}

/// Word-cloud weights for at most `max_words` words
pub fn word_cloud<'a, I>(texts: I, max_words: usize) -> Vec<CloudWord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = FrequencyTable::default();
    for text in texts {
        for word in CLOUD_WORD.find_iter(text) {
            table.add(word.as_str());
        }
    }

    let top = table.most_common(max_words);
    let max_count = top.first().map(|k| k.count).unwrap_or(1) as f64;
    top.into_iter()
        .map(|k| CloudWord {
            weight: k.count as f64 / max_count,
            word: k.word,
            count: k.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_keywords_order() {
        let texts = ["great video", "video not great", "love video"];
        let top = top_keywords(texts, 3);
        assert_eq!(
            top,
            vec![
                KeywordCount { word: "video".into(), count: 3 },
                KeywordCount { word: "great".into(), count: 2 },
                KeywordCount { word: "not".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let top = top_keywords(["b a", "c"], 10);
        let words: Vec<&str> = top.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_keywords_keep_punctuation() {
        let top = top_keywords(["good, good"], 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].word, "good,");
    }

    #[test]
    fn test_empty_input() {
        assert!(top_keywords(Vec::<&str>::new(), 15).is_empty());
        assert!(word_cloud(["", "  "], 200).is_empty());
    }

    #[test]
    fn test_word_cloud_weights() {
        let cloud = word_cloud(["good, good! ok a", "good ok"], 200);
        assert_eq!(cloud[0].word, "good");
        assert_eq!(cloud[0].count, 3);
        assert_eq!(cloud[0].weight, 1.0);
        assert_eq!(cloud[1].word, "ok");
        assert!((cloud[1].weight - 2.0 / 3.0).abs() < 1e-9);
        // single-character words are not cloud words
        assert!(cloud.iter().all(|w| w.word != "a"));
    }

    #[test]
    fn test_word_cloud_limit() {
        let cloud = word_cloud(["aa bb cc dd"], 2);
        assert_eq!(cloud.len(), 2);
    }
}
