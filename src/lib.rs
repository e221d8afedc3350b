// SPDX-License-Identifier: PMPL-1.0-or-later
//! Complybot - Accessibility Compliance Scoring Engine
//!
//! Complybot is the scoring core of a web accessibility audit service. It
//! does not drive a browser or parse HTML: an external rule checker supplies
//! raw violation findings and an external DOM collaborator supplies a bag of
//! page metrics. Complybot turns those inputs into classified issues, weighted
//! scores, and a single compliance-level verdict.
//!
//! ## Pipeline
//!
//! 1. **Classifier**: maps each raw finding to a severity, category,
//!    WCAG/AODA criterion label, and remediation text.
//! 2. **Analyzers**: four independent content heuristics (reading level,
//!    cognitive load, multimedia coverage, navigation robustness), each
//!    producing a 0-100 sub-score from page metrics.
//! 3. **Scanner**: level-gated orchestration - which analyzers run depends on
//!    the conformance levels the caller requested.
//! 4. **Scoring**: severity-weighted base score, level-gated weight blending,
//!    and the ordered compliance-level gates.
//!
//! ## Requested levels
//!
//! A scan request carries an ordered set of level tokens (`A`, `AA`, `AAA`,
//! `AODA`, `COGNITIVE`, `MULTIMEDIA`). A compliance level is never reported
//! unless it was requested.

pub mod analyzers;
pub mod classifier;
pub mod error;
pub mod model;
pub mod scanner;
pub mod scoring;

pub use error::{Result, ScanError};
pub use scanner::{FindingSource, MetricsSource, ScanEngine};
