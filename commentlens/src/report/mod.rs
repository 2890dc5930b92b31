// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Descriptive sentiment report
//!
//! Provides:
//! - Sentiment overview (share per label and average score)
//! - Per-comment sentiment trend
//! - Top keywords and word-cloud weights over normalized text
//! - Extreme examples per polarity
//! - Comment length distribution per label

pub mod keywords;
pub mod stats;

use crate::classifier::SentimentLabel;
use crate::config::AnalysisConfig;
use crate::pipeline::AnalyzedComment;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub use keywords::{CloudWord, KeywordCount};
pub use stats::BoxStats;

/// Aggregate sentiment figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total: usize,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    /// Mean label value in [-1, 1]
    pub average_sentiment: f64,
}

impl Overview {
    /// Percentage of comments carrying `label`
    pub fn share(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive_pct,
            SentimentLabel::Neutral => self.neutral_pct,
            SentimentLabel::Negative => self.negative_pct,
        }
    }
}

/// One point of the sentiment trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub index: usize,
    pub sentiment: i8,
}

/// First examples of each polarity, in fetch order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extremes {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Comment length summary for one label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthStats {
    pub label: SentimentLabel,
    pub stats: BoxStats,
}

/// Complete report over one analyzed batch
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    pub generated_at: DateTime<Utc>,
    pub overview: Overview,
    pub trend: Vec<TrendPoint>,
    pub top_keywords: Vec<KeywordCount>,
    pub word_cloud: Vec<CloudWord>,
    pub extremes: Extremes,
    pub length_distribution: Vec<LengthStats>,
}

impl SentimentReport {
    /// Build every report section from the analyzed comments
    pub fn build(comments: &[AnalyzedComment], config: &AnalysisConfig) -> Self {
        let normalized = || comments.iter().map(|c| c.normalized.as_str());

        let report = Self {
            generated_at: Utc::now(),
            overview: overview(comments),
            trend: comments
                .iter()
                .map(|c| TrendPoint {
                    index: c.index,
                    sentiment: c.label.value(),
                })
                .collect(),
            top_keywords: keywords::top_keywords(normalized(), config.top_keywords),
            word_cloud: keywords::word_cloud(normalized(), config.word_cloud_max_words),
            extremes: extremes(comments, config.extreme_examples),
            length_distribution: length_distribution(comments),
        };

        log::debug!(
            "Built report: {} comments, {} keywords, {} cloud words",
            report.overview.total,
            report.top_keywords.len(),
            report.word_cloud.len()
        );
        report
    }
}

fn overview(comments: &[AnalyzedComment]) -> Overview {
    let total = comments.len();
    if total == 0 {
        return Overview {
            total,
            positive_pct: 0.0,
            neutral_pct: 0.0,
            negative_pct: 0.0,
            average_sentiment: 0.0,
        };
    }

    let pct = |label: SentimentLabel| {
        let count = comments.iter().filter(|c| c.label == label).count();
        count as f64 / total as f64 * 100.0
    };
    let sum: i64 = comments.iter().map(|c| c.label.value() as i64).sum();

    Overview {
        total,
        positive_pct: pct(SentimentLabel::Positive),
        neutral_pct: pct(SentimentLabel::Neutral),
        negative_pct: pct(SentimentLabel::Negative),
        average_sentiment: sum as f64 / total as f64,
    }
}

fn extremes(comments: &[AnalyzedComment], per_label: usize) -> Extremes {
    let first = |label: SentimentLabel| -> Vec<String> {
        comments
            .iter()
            .filter(|c| c.label == label)
            .take(per_label)
            .map(|c| c.original.clone())
            .collect()
    };

    Extremes {
        positive: first(SentimentLabel::Positive),
        negative: first(SentimentLabel::Negative),
    }
}

fn length_distribution(comments: &[AnalyzedComment]) -> Vec<LengthStats> {
    SentimentLabel::ALL
        .iter()
        .filter_map(|label| {
            let lengths: Vec<usize> = comments
                .iter()
                .filter(|c| c.label == *label)
                .map(|c| c.length())
                .collect();
            BoxStats::from_values(&lengths).map(|stats| LengthStats {
                label: *label,
                stats,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(index: usize, original: &str, normalized: &str, label: SentimentLabel) -> AnalyzedComment {
        AnalyzedComment {
            index,
            original: original.to_string(),
            normalized: normalized.to_string(),
            label,
        }
    }

    fn sample() -> Vec<AnalyzedComment> {
        vec![
            comment(0, "Great video!", "great video!", SentimentLabel::Positive),
            comment(1, "Worst video ever", "worst video ever", SentimentLabel::Negative),
            comment(2, "ok", "ok", SentimentLabel::Neutral),
            comment(3, "Love it ❤", "love", SentimentLabel::Positive),
        ]
    }

    #[test]
    fn test_overview() {
        let report = SentimentReport::build(&sample(), &AnalysisConfig::default());
        let overview = &report.overview;
        assert_eq!(overview.total, 4);
        assert_eq!(overview.positive_pct, 50.0);
        assert_eq!(overview.neutral_pct, 25.0);
        assert_eq!(overview.negative_pct, 25.0);
        assert_eq!(overview.average_sentiment, 0.25);
        assert_eq!(overview.share(SentimentLabel::Positive), 50.0);
    }

    #[test]
    fn test_empty_batch() {
        let report = SentimentReport::build(&[], &AnalysisConfig::default());
        assert_eq!(report.overview.total, 0);
        assert_eq!(report.overview.average_sentiment, 0.0);
        assert!(report.trend.is_empty());
        assert!(report.length_distribution.is_empty());
    }

    #[test]
    fn test_trend_follows_fetch_order() {
        let report = SentimentReport::build(&sample(), &AnalysisConfig::default());
        let values: Vec<i8> = report.trend.iter().map(|p| p.sentiment).collect();
        assert_eq!(values, vec![1, -1, 0, 1]);
        assert_eq!(report.trend[3].index, 3);
    }

    #[test]
    fn test_keywords_use_normalized_text() {
        let report = SentimentReport::build(&sample(), &AnalysisConfig::default());
        assert_eq!(report.top_keywords[0].word, "video");
        assert_eq!(report.top_keywords[0].count, 2);
        assert!(report.word_cloud.iter().any(|w| w.word == "love"));
    }

    #[test]
    fn test_extremes_are_originals() {
        let config = AnalysisConfig {
            extreme_examples: 1,
            ..Default::default()
        };
        let report = SentimentReport::build(&sample(), &config);
        assert_eq!(report.extremes.positive, vec!["Great video!"]);
        assert_eq!(report.extremes.negative, vec!["Worst video ever"]);
    }

    #[test]
    fn test_length_distribution_counts_characters() {
        let report = SentimentReport::build(&sample(), &AnalysisConfig::default());
        let positive = &report.length_distribution[0];
        assert_eq!(positive.label, SentimentLabel::Positive);
        assert_eq!(positive.stats.count, 2);
        // "Love it ❤" is 9 characters, not 11 bytes
        assert_eq!(positive.stats.min, 9.0);
        assert_eq!(positive.stats.max, 12.0);
        assert_eq!(report.length_distribution.len(), 3);
    }

    #[test]
    fn test_report_serializes() {
        let report = SentimentReport::build(&sample(), &AnalysisConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overview"]["total"], 4);
        assert_eq!(json["length_distribution"][0]["label"], "positive");
    }
}
