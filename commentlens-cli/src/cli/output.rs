// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Report formatting for table, JSON and CSV output

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use commentlens::{Analysis, AnalyzedComment, SentimentLabel, SentimentReport};
use serde::Serialize;

use super::commands::OutputFormat;

/// Number of word-cloud entries printed in table mode
const TABLE_CLOUD_WORDS: usize = 20;
/// Trend symbols per printed line
const TREND_WIDTH: usize = 60;

/// JSON document emitted by `--format json`
#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a SentimentReport,
    comments: &'a [AnalyzedComment],
}

/// Formats analysis results for the terminal
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render an analysis in the requested format
    pub fn format(analysis: &Analysis, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Table => Ok(Self::format_table(&analysis.report)),
            OutputFormat::Json => serde_json::to_string_pretty(&JsonOutput {
                report: &analysis.report,
                comments: &analysis.comments,
            }),
            OutputFormat::Csv => Ok(Self::format_csv(&analysis.comments)),
        }
    }

    fn format_table(report: &SentimentReport) -> String {
        let mut out = String::new();

        out.push_str(&section("Sentiment Overview"));
        let overview = &report.overview;
        let mut table = new_table(vec![
            "Positive (%)",
            "Neutral (%)",
            "Negative (%)",
            "Avg Sentiment Score",
        ]);
        table.add_row(vec![
            format!("{:.2}", overview.positive_pct),
            format!("{:.2}", overview.neutral_pct),
            format!("{:.2}", overview.negative_pct),
            format!("{:.2}", overview.average_sentiment),
        ]);
        out.push_str(&format!("{}\n", table));

        out.push_str(&section("Sentiment Trend"));
        let symbols: Vec<String> = report
            .trend
            .iter()
            .map(|point| match point.sentiment {
                1 => "+".green().to_string(),
                -1 => "-".red().to_string(),
                _ => "·".normal().to_string(),
            })
            .collect();
        for line in symbols.chunks(TREND_WIDTH) {
            out.push_str(&format!("{}\n", line.concat()));
        }

        out.push_str(&section("Top Keywords"));
        let mut table = new_table(vec!["Word", "Frequency"]);
        for keyword in &report.top_keywords {
            table.add_row(vec![keyword.word.clone(), keyword.count.to_string()]);
        }
        out.push_str(&format!("{}\n", table));

        out.push_str(&section("Word Cloud"));
        let mut table = new_table(vec!["Word", "Count", "Weight"]);
        for word in report.word_cloud.iter().take(TABLE_CLOUD_WORDS) {
            table.add_row(vec![
                word.word.clone(),
                word.count.to_string(),
                format!("{:.2}", word.weight),
            ]);
        }
        out.push_str(&format!("{}\n", table));
        if report.word_cloud.len() > TABLE_CLOUD_WORDS {
            out.push_str(&format!(
                "({} more words, use --format json for the full list)\n",
                report.word_cloud.len() - TABLE_CLOUD_WORDS
            ));
        }

        out.push_str(&section("Most Extreme Comments"));
        out.push_str(&format!("{}\n", "Top Positive".green().bold()));
        for comment in &report.extremes.positive {
            out.push_str(&format!("  • {}\n", comment));
        }
        out.push_str(&format!("{}\n", "Top Negative".red().bold()));
        for comment in &report.extremes.negative {
            out.push_str(&format!("  • {}\n", comment));
        }

        out.push_str(&section("Sentiment Vs Comment Length"));
        let mut table = new_table(vec!["Sentiment", "Count", "Min", "Q1", "Median", "Q3", "Max"]);
        for entry in &report.length_distribution {
            let stats = &entry.stats;
            table.add_row(vec![
                Cell::new(label_text(entry.label)),
                Cell::new(stats.count),
                Cell::new(format!("{:.0}", stats.min)),
                Cell::new(format!("{:.2}", stats.q1)),
                Cell::new(format!("{:.2}", stats.median)),
                Cell::new(format!("{:.2}", stats.q3)),
                Cell::new(format!("{:.0}", stats.max)),
            ]);
        }
        out.push_str(&format!("{}\n", table));

        out
    }

    fn format_csv(comments: &[AnalyzedComment]) -> String {
        let mut out = String::from("index,sentiment,sentiment_label,comment_length,comment,clean_comment\n");
        for comment in comments {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                comment.index,
                comment.label.value(),
                comment.label.name(),
                comment.length(),
                escape_csv(&comment.original),
                escape_csv(&comment.normalized),
            ));
        }
        out
    }
}

fn section(title: &str) -> String {
    format!("\n{}\n", title.bold().blue())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn label_text(label: SentimentLabel) -> String {
    match label {
        SentimentLabel::Positive => label.name().green().to_string(),
        SentimentLabel::Neutral => label.name().to_string(),
        SentimentLabel::Negative => label.name().red().to_string(),
    }
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
