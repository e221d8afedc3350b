// SPDX-License-Identifier: PMPL-1.0-or-later
//! Domain types for the scoring engine.
//!
//! These types form the contract with the external collaborators: the rule
//! checker and DOM-metrics extractor feed `RawFinding`/`PageMetrics` in, and
//! persistence/report collaborators consume `ClassifiedIssue`/`ScanOutcome`
//! out. Everything is serde-serializable for those layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A requested conformance level token.
///
/// Levels gate which heuristic analyzers run and which compliance labels are
/// eligible for the final verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A,
    AA,
    AAA,
    #[serde(rename = "AODA")]
    Aoda,
    #[serde(rename = "COGNITIVE")]
    Cognitive,
    #[serde(rename = "MULTIMEDIA")]
    Multimedia,
}

impl Level {
    /// Rule-checker tags this level maps to (AODA aligns with WCAG AA;
    /// cognitive criteria live in AAA plus the language category).
    pub fn rule_tags(&self) -> &'static [&'static str] {
        match self {
            Level::A => &["wcag2a"],
            Level::AA => &["wcag2aa"],
            Level::AAA => &["wcag2aaa"],
            Level::Aoda => &["wcag2aa"],
            Level::Cognitive => &["wcag2aaa", "cat.language"],
            Level::Multimedia => &["wcag2aa", "wcag2aaa", "cat.time-based-media"],
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::A => write!(f, "A"),
            Level::AA => write!(f, "AA"),
            Level::AAA => write!(f, "AAA"),
            Level::Aoda => write!(f, "AODA"),
            Level::Cognitive => write!(f, "COGNITIVE"),
            Level::Multimedia => write!(f, "MULTIMEDIA"),
        }
    }
}

/// Severity of a classified issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Major => write!(f, "major"),
            Severity::Minor => write!(f, "minor"),
        }
    }
}

/// Impact reported by the external rule checker.
///
/// Unrecognized values deserialize to `Unknown` and classify as minor; the
/// classifier never rejects a finding over its impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
    #[serde(other)]
    Unknown,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
            Impact::Unknown => "unknown",
        }
    }
}

/// One DOM node affected by a finding. A finding with N nodes expands to N
/// classified issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffectedNode {
    /// Raw markup snippet of the offending element
    pub html: String,
}

/// One violation record from the external rule checker, pre-node-expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFinding {
    /// Stable rule identifier (e.g., "color-contrast")
    pub id: String,
    /// Impact reported by the rule checker
    pub impact: Impact,
    /// Human-readable description of the violation
    pub description: String,
    /// Short help text (becomes the issue title)
    pub help: String,
    /// Documentation URL for the rule
    pub help_url: String,
    /// Free-form tags (e.g., "wcag2aa", "cat.aria")
    pub tags: Vec<String>,
    /// Affected nodes
    pub nodes: Vec<AffectedNode>,
}

/// Counts and flags extracted from the rendered page by the external DOM
/// collaborator. Consumed once per scan, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Main-content text with script/style/nav/footer/header subtrees removed
    pub body_text: String,
    pub total_elements: usize,
    pub interactive_elements: usize,
    pub form_elements: usize,
    /// Anchor elements with an href
    pub link_count: usize,
    pub images_with_alt: usize,
    pub images_without_alt: usize,
    /// Heading tag names in document order (e.g., ["H1", "H2"])
    pub heading_tags: Vec<String>,
    /// Help affordances present (aria-describedby, help text, tooltips)
    pub has_help_text: bool,
    /// Autoplaying video or audio present
    pub has_autoplay: bool,
    pub video_elements: usize,
    pub audio_elements: usize,
    /// Video tracks of kind captions/subtitles
    pub videos_with_captions: usize,
    /// Video tracks of kind descriptions
    pub videos_with_descriptions: usize,
    pub has_sign_language: bool,
    pub has_audio_description: bool,
    pub has_skip_links: bool,
    pub has_landmarks: bool,
    /// A nav element is present
    pub has_nav: bool,
    pub focusable_elements: usize,
    /// accesskey or custom keyboard-shortcut markers present
    pub has_custom_shortcuts: bool,
}

/// How an issue was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueOrigin {
    /// Derived from a rule-checker finding
    Automated,
    /// Synthesized from a heuristic analyzer's issue list
    Heuristic,
}

/// One classified, severity-tagged issue surfaced to the end user.
///
/// Immutable after creation and owned exclusively by the scan that produced
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedIssue {
    pub scan_id: Uuid,
    /// Canonical criterion label (e.g., "WCAG 2.1 AA - 1.4.3 Contrast (Minimum)")
    pub criterion: String,
    pub severity: Severity,
    pub category: String,
    pub sub_category: Option<String>,
    pub title: String,
    pub description: String,
    /// Markup snippet of the affected element
    pub element: String,
    pub remediation: String,
    /// Impact as reported upstream (synthesized issues use `Serious`)
    pub impact: Impact,
    pub help_url: String,
    pub origin: IssueOrigin,
    /// Reading-level label, for reading-level issues
    pub reading_level: Option<String>,
    /// Cognitive-load tag, for cognitive issues
    pub cognitive_load: Option<String>,
    /// "video" or "audio", for multimedia issues
    pub multimedia_type: Option<String>,
}

/// A request to audit one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub scan_id: Uuid,
    pub url: String,
    /// Requested levels, unique, in caller order
    pub levels: Vec<Level>,
}

impl ScanRequest {
    /// Create a request with a fresh scan id. Duplicate levels are dropped,
    /// keeping first-seen order.
    pub fn new(url: &str, levels: &[Level]) -> Self {
        let mut unique = Vec::new();
        for level in levels {
            if !unique.contains(level) {
                unique.push(*level);
            }
        }
        Self {
            scan_id: Uuid::new_v4(),
            url: url.to_string(),
            levels: unique,
        }
    }

    pub fn has_level(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }
}

/// Scan lifecycle state. Completed and failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Pending,
    Scanning,
    Completed,
    Failed,
}

/// The single discrete verdict for a completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceLevel {
    A,
    AA,
    AAA,
    #[serde(rename = "AODA")]
    Aoda,
    #[serde(rename = "COGNITIVE")]
    Cognitive,
    #[serde(rename = "MULTIMEDIA")]
    Multimedia,
    #[serde(rename = "none")]
    None,
}

impl std::fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceLevel::A => write!(f, "A"),
            ComplianceLevel::AA => write!(f, "AA"),
            ComplianceLevel::AAA => write!(f, "AAA"),
            ComplianceLevel::Aoda => write!(f, "AODA"),
            ComplianceLevel::Cognitive => write!(f, "COGNITIVE"),
            ComplianceLevel::Multimedia => write!(f, "MULTIMEDIA"),
            ComplianceLevel::None => write!(f, "none"),
        }
    }
}

/// Final result record for one scan, handed to the persistence collaborator.
///
/// A sub-score field is `Some` if and only if its governing level was
/// requested (or implied by AODA).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub scan_id: Uuid,
    pub status: ScanStatus,
    pub overall_score: Option<u32>,
    pub compliance_level: ComplianceLevel,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub major_issues: usize,
    pub minor_issues: usize,
    /// Reading-level band label, when the cognitive analysis ran
    pub reading_level: Option<String>,
    pub cognitive_score: Option<u32>,
    pub multimedia_score: Option<u32>,
    pub navigation_score: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ScanOutcome {
    /// Terminal failure record: no partial scores, no issues persisted.
    pub fn failed(scan_id: Uuid) -> Self {
        Self {
            scan_id,
            status: ScanStatus::Failed,
            overall_score: None,
            compliance_level: ComplianceLevel::None,
            total_issues: 0,
            critical_issues: 0,
            major_issues: 0,
            minor_issues: 0,
            reading_level: None,
            cognitive_score: None,
            multimedia_score: None,
            navigation_score: None,
            created_at: Utc::now(),
            completed_at: Some(Utc::now()),
        }
    }
}

/// Everything a completed scan produces: the outcome row plus the full
/// ordered issue list for persistence/report collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    pub issues: Vec<ClassifiedIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dedups_levels() {
        let request = ScanRequest::new("https://example.com", &[Level::A, Level::AA, Level::A]);
        assert_eq!(request.levels, vec![Level::A, Level::AA]);
        assert!(request.has_level(Level::AA));
        assert!(!request.has_level(Level::Aoda));
    }

    #[test]
    fn test_unknown_impact_deserializes() {
        let impact: Impact = serde_json::from_str("\"catastrophic\"").expect("valid JSON");
        assert_eq!(impact, Impact::Unknown);
        let impact: Impact = serde_json::from_str("\"serious\"").expect("valid JSON");
        assert_eq!(impact, Impact::Serious);
    }

    #[test]
    fn test_level_serde_tokens() {
        assert_eq!(serde_json::to_string(&Level::Aoda).unwrap(), "\"AODA\"");
        assert_eq!(serde_json::to_string(&Level::Cognitive).unwrap(), "\"COGNITIVE\"");
        let level: Level = serde_json::from_str("\"MULTIMEDIA\"").expect("valid JSON");
        assert_eq!(level, Level::Multimedia);
    }

    #[test]
    fn test_compliance_level_display() {
        assert_eq!(ComplianceLevel::Aoda.to_string(), "AODA");
        assert_eq!(ComplianceLevel::None.to_string(), "none");
    }

    #[test]
    fn test_failed_outcome_has_no_scores() {
        let outcome = ScanOutcome::failed(Uuid::new_v4());
        assert_eq!(outcome.status, ScanStatus::Failed);
        assert!(outcome.overall_score.is_none());
        assert!(outcome.cognitive_score.is_none());
        assert_eq!(outcome.compliance_level, ComplianceLevel::None);
    }
}
