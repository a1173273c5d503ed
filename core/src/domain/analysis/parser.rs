//! Line-oriented reader for the vision model's free-text answer.
//!
//! The model is asked for blocks shaped like
//!
//! ```text
//! Sugar:
//! Harm Scale: 8/10
//! Potential Health Concerns: Diabetes, Obesity
//! ```
//!
//! Anything that does not fit is skipped. Malformed input yields fewer (or
//! zero) records, never an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::analysis::entities::{AnalysisRecord, HarmScale};

static HARM_SCALE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)harm\s*scale").expect("harm scale pattern is valid"));

static HARM_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)harm").expect("harm pattern is valid"));

static CONCERN_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)disease|health|concern").expect("concern pattern is valid")
});

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("number pattern is valid"));

#[derive(Debug, PartialEq, Eq)]
enum ParsedLine<'a> {
    Ingredient(&'a str),
    HarmScale(HarmScale),
    Concerns(Vec<String>),
    Ignored,
}

#[derive(Debug)]
struct PendingRecord {
    name: String,
    harm_scale: Option<HarmScale>,
    health_concerns: Vec<String>,
}

impl PendingRecord {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            harm_scale: None,
            health_concerns: Vec::new(),
        }
    }

    fn finish(self) -> AnalysisRecord {
        AnalysisRecord::new(
            self.name,
            self.harm_scale.unwrap_or_default(),
            self.health_concerns,
        )
    }
}

/// Converts model text into ingredient records, in source order.
pub fn parse_analysis_text(text: &str) -> Vec<AnalysisRecord> {
    let mut records = Vec::new();
    let mut current: Option<PendingRecord> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match classify_line(line) {
            ParsedLine::Ingredient(name) => {
                if let Some(done) = current.take() {
                    records.push(done.finish());
                }
                current = Some(PendingRecord::named(name));
            }
            ParsedLine::HarmScale(scale) => match current.as_mut() {
                Some(record) => record.harm_scale = Some(scale),
                None => trace!(line, "harm scale before any ingredient, skipping"),
            },
            ParsedLine::Concerns(concerns) => match current.as_mut() {
                Some(record) => record.health_concerns.extend(concerns),
                None => trace!(line, "health concerns before any ingredient, skipping"),
            },
            ParsedLine::Ignored => {}
        }
    }

    if let Some(done) = current {
        records.push(done.finish());
    }

    records
}

fn classify_line(line: &str) -> ParsedLine<'_> {
    if HARM_SCALE_LINE.is_match(line) {
        return ParsedLine::HarmScale(extract_harm_scale(line));
    }

    if CONCERN_KEYWORD.is_match(line) {
        return ParsedLine::Concerns(split_concerns(line));
    }

    if HARM_KEYWORD.is_match(line) {
        return ParsedLine::Ignored;
    }

    match line.split_once(':') {
        Some((name, _)) if !name.trim().is_empty() => ParsedLine::Ingredient(name.trim()),
        _ => ParsedLine::Ignored,
    }
}

/// First ASCII integer on the line, or the default scale when there is none.
fn extract_harm_scale(line: &str) -> HarmScale {
    FIRST_NUMBER
        .find(line)
        // ASCII digits only, so parsing fails on overflow alone
        .map(|digits| HarmScale::clamped(digits.as_str().parse().unwrap_or(u32::MAX)))
        .unwrap_or_default()
}

fn split_concerns(line: &str) -> Vec<String> {
    let Some((_, remainder)) = line.split_once(':') else {
        return Vec::new();
    };

    remainder
        .split(',')
        .map(str::trim)
        .filter(|concern| !concern.is_empty())
        .map(str::to_string)
        .collect()
}
