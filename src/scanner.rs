// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan orchestrator.
//!
//! Pulls raw findings and page metrics from the external collaborators,
//! classifies every finding-node pair, runs the level-gated heuristic
//! analyzers, synthesizes issues for analyzer-detected problems, and folds
//! everything into one scored, graded [`ScanReport`].
//!
//! Each scan is self-contained: it owns its metrics, analyses, and issue
//! list, so callers may run any number of scans concurrently. Within a scan
//! the four analyzers are independent and run in a fixed order purely for
//! determinism of the issue list.

use crate::analyzers::{
    cognitive, multimedia, navigation, reading_level, CognitiveAnalysis, MultimediaAnalysis,
    NavigationAnalysis, ReadingLevelAnalysis,
};
use crate::classifier::{classify, ClassifierTables};
use crate::error::{Result, ScanError};
use crate::model::{
    ClassifiedIssue, ComplianceLevel, Impact, IssueOrigin, Level, PageMetrics, RawFinding,
    ScanOutcome, ScanReport, ScanRequest, ScanStatus, Severity,
};
use crate::scoring;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Supplies raw rule-checker findings for a page. Implemented by the
/// browser-automation collaborator.
pub trait FindingSource {
    /// Fetch findings for `url`, restricted to rules carrying any of `tags`.
    fn fetch_findings(&self, url: &str, tags: &[&'static str]) -> anyhow::Result<Vec<RawFinding>>;
}

/// Supplies extracted page metrics. Implemented by the DOM-metrics
/// collaborator.
pub trait MetricsSource {
    fn collect_metrics(&self, url: &str) -> anyhow::Result<PageMetrics>;
}

/// Rule-checker tags to run for a set of requested levels, deduplicated in
/// first-seen order. Best-practice rules are always included.
pub fn rule_tags(levels: &[Level]) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for level in levels {
        for &tag in level.rule_tags() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    if !tags.contains(&"best-practice") {
        tags.push("best-practice");
    }
    tags
}

/// Which analyzers a request selects. Reading level is a sub-input of the
/// cognitive analysis, not independently selectable.
#[derive(Debug, Clone, Copy)]
struct AnalyzerSelection {
    cognitive: bool,
    multimedia: bool,
    navigation: bool,
}

impl AnalyzerSelection {
    fn for_request(request: &ScanRequest) -> Self {
        let aoda = request.has_level(Level::Aoda);
        Self {
            cognitive: request.has_level(Level::Cognitive) || aoda,
            multimedia: request.has_level(Level::Multimedia) || aoda,
            navigation: request.has_level(Level::AAA) || aoda,
        }
    }

    fn any(&self) -> bool {
        self.cognitive || self.multimedia || self.navigation
    }
}

/// The scoring engine: classifier tables loaded once, shared by reference
/// across all scans.
#[derive(Debug, Default)]
pub struct ScanEngine {
    tables: ClassifierTables,
}

impl ScanEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one scan to completion.
    ///
    /// Returns the completed outcome and the full ordered issue list, or an
    /// error when a collaborator cannot supply findings or metrics at all -
    /// in that case no partial outcome is produced and the caller records
    /// the scan as failed ([`ScanOutcome::failed`]).
    pub fn run_scan(
        &self,
        request: &ScanRequest,
        findings: &dyn FindingSource,
        metrics: &dyn MetricsSource,
    ) -> Result<ScanReport> {
        let started_at = Utc::now();
        info!(
            scan_id = %request.scan_id,
            url = %request.url,
            levels = ?request.levels,
            "starting scan"
        );

        let tags = rule_tags(&request.levels);
        let raw_findings = findings
            .fetch_findings(&request.url, &tags)
            .map_err(ScanError::FindingSource)?;
        debug!(count = raw_findings.len(), "fetched raw findings");

        let selection = AnalyzerSelection::for_request(request);

        // Metrics are only collected when an analyzer will consume them.
        let page_metrics = if selection.any() {
            Some(
                metrics
                    .collect_metrics(&request.url)
                    .map_err(ScanError::MetricsSource)?,
            )
        } else {
            None
        };

        let mut issues: Vec<ClassifiedIssue> = Vec::new();
        let mut critical_count = 0usize;
        let mut major_count = 0usize;
        let mut minor_count = 0usize;

        // A finding with N affected nodes expands to N issues.
        for finding in &raw_findings {
            let classification = classify(&self.tables, finding);
            for node in &finding.nodes {
                match classification.severity {
                    Severity::Critical => critical_count += 1,
                    Severity::Major => major_count += 1,
                    Severity::Minor => minor_count += 1,
                }
                issues.push(ClassifiedIssue {
                    scan_id: request.scan_id,
                    criterion: classification.criterion.clone(),
                    severity: classification.severity,
                    category: classification.category.to_string(),
                    sub_category: Some(classification.sub_category.to_string()),
                    title: finding.help.clone(),
                    description: finding.description.clone(),
                    element: node.html.clone(),
                    remediation: classification.remediation.clone(),
                    impact: finding.impact,
                    help_url: finding.help_url.clone(),
                    origin: IssueOrigin::Automated,
                    reading_level: None,
                    cognitive_load: None,
                    multimedia_type: None,
                });
            }
        }

        let reading = match (&page_metrics, selection.cognitive) {
            (Some(m), true) => reading_level::analyze(m),
            _ => ReadingLevelAnalysis::neutral(),
        };
        let cognitive = match (&page_metrics, selection.cognitive) {
            (Some(m), true) => cognitive::analyze(m),
            _ => CognitiveAnalysis::neutral(),
        };
        let multimedia = match (&page_metrics, selection.multimedia) {
            (Some(m), true) => multimedia::analyze(m),
            _ => MultimediaAnalysis::neutral(),
        };
        let navigation = match (&page_metrics, selection.navigation) {
            (Some(m), true) => navigation::analyze(m),
            _ => NavigationAnalysis::neutral(),
        };
        debug!(
            reading = reading.score,
            cognitive = cognitive.score,
            multimedia = multimedia.score,
            navigation = navigation.score,
            "analyzer sub-scores"
        );

        major_count += self.synthesize_issues(
            request,
            &reading,
            &cognitive,
            &multimedia,
            &navigation,
            &mut issues,
        );

        let base = scoring::base_score(critical_count, major_count, minor_count);
        let weights =
            scoring::weights_for(selection.cognitive, selection.multimedia, selection.navigation);
        let card = scoring::ScoreCard {
            critical: critical_count,
            major: major_count,
            minor: minor_count,
            reading: reading.score,
            cognitive: cognitive.score,
            multimedia: multimedia.score,
            navigation: navigation.score,
        };
        let overall = scoring::overall_score(base, &card, &weights);
        let compliance_level = scoring::resolve_compliance(request, overall, &card);

        let total_issues = issues.len();
        debug_assert_eq!(total_issues, critical_count + major_count + minor_count);

        if compliance_level == ComplianceLevel::None {
            warn!(scan_id = %request.scan_id, overall, "scan did not meet any requested level");
        }
        info!(
            scan_id = %request.scan_id,
            overall,
            level = %compliance_level,
            issues = total_issues,
            "scan completed"
        );

        let outcome = ScanOutcome {
            scan_id: request.scan_id,
            status: ScanStatus::Completed,
            overall_score: Some(overall),
            compliance_level,
            total_issues,
            critical_issues: critical_count,
            major_issues: major_count,
            minor_issues: minor_count,
            reading_level: selection.cognitive.then(|| reading.level.clone()),
            cognitive_score: selection.cognitive.then_some(cognitive.score),
            multimedia_score: selection.multimedia.then_some(multimedia.score),
            navigation_score: selection.navigation.then_some(navigation.score),
            created_at: started_at,
            completed_at: Some(Utc::now()),
        };

        Ok(ScanReport { outcome, issues })
    }

    /// Turn analyzer-detected problems into classified issues. Every
    /// synthesized issue is major severity; returns how many were added.
    fn synthesize_issues(
        &self,
        request: &ScanRequest,
        reading: &ReadingLevelAnalysis,
        cognitive: &CognitiveAnalysis,
        multimedia: &MultimediaAnalysis,
        navigation: &NavigationAnalysis,
        issues: &mut Vec<ClassifiedIssue>,
    ) -> usize {
        let mut added = 0usize;

        if reading.score < 60 {
            issues.push(ClassifiedIssue {
                scan_id: request.scan_id,
                criterion: "AODA - Cognitive & Reading Support".to_string(),
                severity: Severity::Major,
                category: "Cognitive & Reading".to_string(),
                sub_category: Some("Reading Level".to_string()),
                title: "Content reading level too high".to_string(),
                description: format!(
                    "Content reading level ({}) may be too difficult for general audiences",
                    reading.level
                ),
                element: "<body>".to_string(),
                remediation: reading.recommendations.join(". "),
                impact: Impact::Serious,
                help_url: "https://www.w3.org/WAI/WCAG21/Understanding/reading-level.html"
                    .to_string(),
                origin: IssueOrigin::Heuristic,
                reading_level: Some(reading.level.clone()),
                cognitive_load: Some("high".to_string()),
                multimedia_type: None,
            });
            added += 1;
        }

        if cognitive.score < 70 {
            for issue in &cognitive.issues {
                issues.push(ClassifiedIssue {
                    scan_id: request.scan_id,
                    criterion: "AODA - Cognitive & Reading Support".to_string(),
                    severity: Severity::Major,
                    category: "Cognitive & Reading".to_string(),
                    sub_category: Some("Cognitive Load".to_string()),
                    title: "High cognitive load detected".to_string(),
                    description: issue.clone(),
                    element: "<body>".to_string(),
                    remediation: cognitive.recommendations.join(". "),
                    impact: Impact::Serious,
                    help_url:
                        "https://www.w3.org/WAI/WCAG21/Understanding/consistent-navigation.html"
                            .to_string(),
                    origin: IssueOrigin::Heuristic,
                    reading_level: None,
                    cognitive_load: Some("high".to_string()),
                    multimedia_type: None,
                });
                added += 1;
            }
        }

        if multimedia.score < 80 {
            for issue in &multimedia.issues {
                issues.push(ClassifiedIssue {
                    scan_id: request.scan_id,
                    criterion: "AODA - Multimedia Accessibility".to_string(),
                    severity: Severity::Major,
                    category: "Multimedia".to_string(),
                    sub_category: Some("Audio/Video Content".to_string()),
                    title: "Multimedia accessibility issue".to_string(),
                    description: issue.clone(),
                    element: "<video>, <audio>".to_string(),
                    remediation: "Provide comprehensive multimedia alternatives including \
                                  captions, transcripts, audio descriptions, and sign language \
                                  interpretation"
                        .to_string(),
                    impact: Impact::Serious,
                    help_url:
                        "https://www.w3.org/WAI/WCAG21/Understanding/captions-prerecorded.html"
                            .to_string(),
                    origin: IssueOrigin::Heuristic,
                    reading_level: None,
                    cognitive_load: None,
                    multimedia_type: Some(
                        if multimedia.has_video { "video" } else { "audio" }.to_string(),
                    ),
                });
                added += 1;
            }
        }

        if navigation.score < 80 {
            for issue in &navigation.issues {
                issues.push(ClassifiedIssue {
                    scan_id: request.scan_id,
                    criterion: "WCAG 2.1 AAA - Enhanced Navigation".to_string(),
                    severity: Severity::Major,
                    category: "Enhanced Navigation".to_string(),
                    sub_category: Some("Keyboard Support".to_string()),
                    title: "Navigation accessibility issue".to_string(),
                    description: issue.clone(),
                    element: "<nav>, <main>".to_string(),
                    remediation: "Implement comprehensive keyboard navigation support with skip \
                                  links, consistent navigation patterns, and custom shortcuts"
                        .to_string(),
                    impact: Impact::Serious,
                    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/bypass-blocks.html"
                        .to_string(),
                    origin: IssueOrigin::Heuristic,
                    reading_level: None,
                    cognitive_load: None,
                    multimedia_type: None,
                });
                added += 1;
            }
        }

        added
    }
}
