// SPDX-License-Identifier: PMPL-1.0-or-later
//! Reading-level analyzer - WCAG 3.1.5 Reading Level (Level AAA)
//!
//! Computes the Flesch Reading Ease of the page's extracted main-content
//! text and maps it to one of seven labeled bands. Bands below "Fairly
//! Difficult" attach a remediation recommendation.

use crate::model::PageMetrics;
use regex::Regex;
use std::sync::OnceLock;

/// Result of the reading-level analysis.
#[derive(Debug, Clone)]
pub struct ReadingLevelAnalysis {
    /// Band label, e.g. "Standard (8th-9th grade)". "Unknown" when there is
    /// no readable text, "N/A" when the analysis did not run.
    pub level: String,
    /// Flesch Reading Ease, clamped to >= 0 and rounded
    pub score: u32,
    pub recommendations: Vec<String>,
}

impl ReadingLevelAnalysis {
    /// Neutral result for scans that did not request cognitive analysis.
    pub fn neutral() -> Self {
        Self {
            level: "N/A".to_string(),
            score: 100,
            recommendations: Vec::new(),
        }
    }
}

/// Analyze the reading level of the extracted body text.
pub fn analyze(metrics: &PageMetrics) -> ReadingLevelAnalysis {
    let text = metrics.body_text.trim();
    if text.is_empty() {
        return ReadingLevelAnalysis {
            level: "Unknown".to_string(),
            score: 0,
            recommendations: vec!["No readable content found".to_string()],
        };
    }

    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences.is_empty() || words.is_empty() {
        return ReadingLevelAnalysis {
            level: "Unknown".to_string(),
            score: 0,
            recommendations: vec!["No readable sentences found".to_string()],
        };
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let avg_syllables_per_word = syllables as f64 / words.len() as f64;
    let flesch = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;

    // The unclamped value drives banding; the reported score is clamped.
    let (level, recommendations) = band(flesch);

    ReadingLevelAnalysis {
        level: level.to_string(),
        score: flesch.round().max(0.0) as u32,
        recommendations,
    }
}

/// Map a Flesch Reading Ease score to its band label and recommendations.
fn band(flesch: f64) -> (&'static str, Vec<String>) {
    if flesch >= 90.0 {
        ("Very Easy (5th grade)", Vec::new())
    } else if flesch >= 80.0 {
        ("Easy (6th grade)", Vec::new())
    } else if flesch >= 70.0 {
        ("Fairly Easy (7th grade)", Vec::new())
    } else if flesch >= 60.0 {
        ("Standard (8th-9th grade)", Vec::new())
    } else if flesch >= 50.0 {
        (
            "Fairly Difficult (10th-12th grade)",
            vec!["Simplify sentence structure and vocabulary".to_string()],
        )
    } else if flesch >= 30.0 {
        (
            "Difficult (College level)",
            vec!["Text may be too complex for general audiences".to_string()],
        )
    } else {
        (
            "Very Difficult (Graduate level)",
            vec!["Provide plain language alternatives".to_string()],
        )
    }
}

fn syllable_patterns() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"),
            Regex::new(r"[aeiouy]{1,2}").expect("valid regex"),
        )
    })
}

/// English syllable heuristic: short words count as one syllable, common
/// silent suffixes are stripped, then vowel-group runs are counted.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.len() <= 3 {
        return 1;
    }

    let (suffix, clusters) = syllable_patterns();
    let word = suffix.replace(&word, "");
    let word = word.strip_prefix('y').unwrap_or(&word);

    clusters.find_iter(word).count().max(1)
}
