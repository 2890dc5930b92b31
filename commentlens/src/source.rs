// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Comment sources
//!
//! A source streams raw comment texts for a content identifier. Fetching is
//! bounded and tolerant: a source that fails part-way still hands back the
//! comments read before the failure, together with the error, so callers can
//! warn instead of aborting.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Stream of comment texts produced by a source
pub type CommentStream<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Supplier of raw comment texts
pub trait CommentSource: Send + Sync {
    /// Open a stream of comments for the given content identifier
    fn comments(&self, identifier: &str) -> Result<CommentStream<'_>>;
}

/// Result of a bounded fetch
#[derive(Debug)]
pub struct FetchOutcome {
    /// Comments in source order, never more than the requested limit
    pub comments: Vec<String>,
    /// Failure that cut the fetch short, if any
    pub error: Option<Error>,
}

impl FetchOutcome {
    /// Whether the source failed before the limit or the end was reached
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

/// Collect up to `limit` non-empty comments from a source
pub fn fetch_comments<S>(source: &S, identifier: &str, limit: usize) -> FetchOutcome
where
    S: CommentSource + ?Sized,
{
    let mut comments = Vec::new();

    let stream = match source.comments(identifier) {
        Ok(stream) => stream,
        Err(e) => {
            log::warn!("Could not open comments for '{}': {}", identifier, e);
            return FetchOutcome {
                comments,
                error: Some(e),
            };
        }
    };

    for item in stream {
        match item {
            Ok(text) => {
                if !text.is_empty() {
                    comments.push(text);
                }
                if comments.len() >= limit {
                    break;
                }
            }
            Err(e) => {
                log::warn!(
                    "Fetching '{}' stopped after {} comments: {}",
                    identifier,
                    comments.len(),
                    e
                );
                return FetchOutcome {
                    comments,
                    error: Some(e),
                };
            }
        }
    }

    log::info!("Fetched {} comments from '{}'", comments.len(), identifier);
    FetchOutcome {
        comments,
        error: None,
    }
}

/// One record of a comment downloader export
#[derive(Debug, Deserialize)]
struct ExportedComment {
    #[serde(default)]
    text: Option<String>,
}

/// Reads comment downloader exports: one JSON object per line with a
/// `text` field. The identifier is the export file path.
#[derive(Debug, Clone, Default)]
pub struct JsonLinesSource;

impl JsonLinesSource {
    pub fn new() -> Self {
        Self
    }
}

impl CommentSource for JsonLinesSource {
    fn comments(&self, identifier: &str) -> Result<CommentStream<'_>> {
        let path = Path::new(identifier);
        let file = File::open(path).map_err(|e| {
            Error::SourceUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let stream = BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => return Some(Err(Error::SourceUnavailable(e.to_string()))),
                };
                if line.trim().is_empty() {
                    return None;
                }
                match serde_json::from_str::<ExportedComment>(&line) {
                    Ok(record) => Some(Ok(record.text.unwrap_or_default())),
                    Err(e) => Some(Err(Error::SourceUnavailable(format!(
                        "malformed record on line {}: {}",
                        idx + 1,
                        e
                    )))),
                }
            });

        Ok(Box::new(stream))
    }
}

/// In-memory source keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    comments: HashMap<String, Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the comments served for an identifier
    pub fn with_comments<I, S>(mut self, identifier: &str, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments.insert(
            identifier.to_string(),
            comments.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl CommentSource for StaticSource {
    fn comments(&self, identifier: &str) -> Result<CommentStream<'_>> {
        let comments = self
            .comments
            .get(identifier)
            .ok_or_else(|| Error::SourceUnavailable(format!("unknown identifier '{}'", identifier)))?;
        Ok(Box::new(comments.iter().cloned().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that yields a few comments and then fails
    struct FlakySource;

    impl CommentSource for FlakySource {
        fn comments(&self, _identifier: &str) -> Result<CommentStream<'_>> {
            let items = vec![
                Ok("first".to_string()),
                Ok("second".to_string()),
                Err(Error::SourceUnavailable("connection reset".to_string())),
                Ok("never seen".to_string()),
            ];
            Ok(Box::new(items.into_iter()))
        }
    }

    #[test]
    fn test_limit_is_respected() {
        let source = StaticSource::new().with_comments("vid", (0..10).map(|i| format!("c{}", i)));
        let outcome = fetch_comments(&source, "vid", 3);
        assert_eq!(outcome.comments, vec!["c0", "c1", "c2"]);
        assert!(!outcome.is_partial());
    }

    #[test]
    fn test_fewer_than_limit() {
        let source = StaticSource::new().with_comments("vid", ["a", "b"]);
        let outcome = fetch_comments(&source, "vid", 500);
        assert_eq!(outcome.comments.len(), 2);
    }

    #[test]
    fn test_empty_texts_are_skipped() {
        let source = StaticSource::new().with_comments("vid", ["", "kept", "", " "]);
        let outcome = fetch_comments(&source, "vid", 10);
        assert_eq!(outcome.comments, vec!["kept", " "]);
    }

    #[test]
    fn test_failure_keeps_partial_results() {
        let outcome = fetch_comments(&FlakySource, "vid", 10);
        assert_eq!(outcome.comments, vec!["first", "second"]);
        assert!(matches!(outcome.error, Some(Error::SourceUnavailable(_))));
    }

    #[test]
    fn test_unknown_identifier() {
        let outcome = fetch_comments(&StaticSource::new(), "missing", 10);
        assert!(outcome.comments.is_empty());
        assert!(outcome.is_partial());
    }

    #[test]
    fn test_json_lines_export() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            concat!(
                r#"{"cid": "a1", "text": "Great video!", "votes": "12"}"#,
                "\n\n",
                r#"{"cid": "a2", "text": ""}"#,
                "\n",
                r#"{"cid": "a3"}"#,
                "\n",
                r#"{"cid": "a4", "text": "line one\nline two"}"#,
                "\n"
            ),
        )
        .unwrap();

        let source = JsonLinesSource::new();
        let outcome = fetch_comments(&source, file.path().to_str().unwrap(), 100);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.comments, vec!["Great video!", "line one\nline two"]);
    }

    #[test]
    fn test_json_lines_malformed_record() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{\"text\": \"ok\"}\nnot json\n{\"text\": \"late\"}\n").unwrap();

        let outcome = fetch_comments(&JsonLinesSource::new(), file.path().to_str().unwrap(), 100);
        assert_eq!(outcome.comments, vec!["ok"]);
        match outcome.error {
            Some(Error::SourceUnavailable(msg)) => assert!(msg.contains("line 2")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_json_lines_missing_file() {
        let outcome = fetch_comments(&JsonLinesSource::new(), "/nonexistent/export.jsonl", 10);
        assert!(outcome.comments.is_empty());
        assert!(matches!(outcome.error, Some(Error::SourceUnavailable(_))));
    }
}
