// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scoring aggregator and compliance-level resolver.
//!
//! The base score is driven by classified-issue severity counts; analyzer
//! sub-scores blend in with level-gated weights. Weights always sum to
//! exactly 1: the shortfall from analyzers that did not run is added back
//! onto the base weight, so fewer requested analyzers means automated
//! findings carry more of the overall score.

use crate::model::{ComplianceLevel, Level, ScanRequest};

/// Weight applied to each scoring factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub base: f64,
    pub reading: f64,
    pub cognitive: f64,
    pub multimedia: f64,
    pub navigation: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.base + self.reading + self.cognitive + self.multimedia + self.navigation
    }
}

/// Sub-scores feeding aggregation and the compliance resolver.
///
/// Analyzers that did not run hold their neutral score (100); their weight
/// is zero so they cannot affect the aggregate.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCard {
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub reading: u32,
    pub cognitive: u32,
    pub multimedia: u32,
    pub navigation: u32,
}

/// Severity-weighted base score: 10 per critical, 5 per major, 2 per minor,
/// floored at 0.
pub fn base_score(critical: usize, major: usize, minor: usize) -> u32 {
    let deduction = (critical * 10 + major * 5 + minor * 2) as i64;
    (100 - deduction).max(0) as u32
}

/// Level-gated weights. Base starts at 0.4 and absorbs the shortfall of any
/// analyzer that did not run, keeping the sum at exactly 1.
pub fn weights_for(cognitive_ran: bool, multimedia_ran: bool, navigation_ran: bool) -> Weights {
    let mut weights = Weights {
        base: 0.4,
        reading: 0.0,
        cognitive: 0.0,
        multimedia: 0.0,
        navigation: 0.0,
    };
    if cognitive_ran {
        weights.reading = 0.15;
        weights.cognitive = 0.15;
    }
    if multimedia_ran {
        weights.multimedia = 0.15;
    }
    if navigation_ran {
        weights.navigation = 0.15;
    }

    let total = weights.sum();
    if total < 1.0 {
        weights.base += 1.0 - total;
    }
    weights
}

/// Weighted overall score, rounded to the nearest integer.
pub fn overall_score(base: u32, card: &ScoreCard, weights: &Weights) -> u32 {
    let weighted = base as f64 * weights.base
        + card.reading as f64 * weights.reading
        + card.cognitive as f64 * weights.cognitive
        + card.multimedia as f64 * weights.multimedia
        + card.navigation as f64 * weights.navigation;
    weighted.round() as u32
}

/// Resolve the single compliance-level verdict.
///
/// Gates are evaluated in order and cross-checked against the requested
/// levels: a level is never reported unless it was requested, and a gate
/// whose tier was not requested falls through to the next requested tier.
/// A fallback pass can still promote to COGNITIVE or MULTIMEDIA on partial
/// passes.
///
/// Deliberately not idempotent across requests: the same scores with
/// different requested levels can yield different labels.
pub fn resolve_compliance(request: &ScanRequest, overall: u32, card: &ScoreCard) -> ComplianceLevel {
    let critical = card.critical;
    let major = card.major;

    let level = if request.has_level(Level::Cognitive)
        && critical == 0
        && major == 0
        && overall >= 80
        && card.cognitive >= 80
        && card.reading >= 80
    {
        ComplianceLevel::Cognitive
    } else if request.has_level(Level::Multimedia)
        && critical == 0
        && major == 0
        && overall >= 80
        && card.multimedia >= 80
    {
        ComplianceLevel::Multimedia
    } else if request.has_level(Level::Aoda) && critical == 0 && major == 0 && overall >= 80 {
        ComplianceLevel::Aoda
    } else if request.has_level(Level::AAA) && critical == 0 && major <= 1 && overall >= 75 {
        ComplianceLevel::AAA
    } else if request.has_level(Level::AA) && critical == 0 && overall >= 60 {
        ComplianceLevel::AA
    } else if request.has_level(Level::A) && critical <= 2 && overall >= 50 {
        ComplianceLevel::A
    } else {
        ComplianceLevel::None
    };

    // Fallback pass: partial passes for the specific levels.
    if level == ComplianceLevel::None
        && request.has_level(Level::Cognitive)
        && card.cognitive >= 70
        && card.reading >= 60
    {
        ComplianceLevel::Cognitive
    } else if level == ComplianceLevel::None
        && request.has_level(Level::Multimedia)
        && card.multimedia >= 80
    {
        ComplianceLevel::Multimedia
    } else {
        level
    }
}
