// SPDX-License-Identifier: PMPL-1.0-or-later
//! Cognitive-load analyzer.
//!
//! Starts at 100 and deducts fixed penalties when thresholds are crossed:
//! element density, context-free links, unassisted forms, autoplay media,
//! and missing heading structure. The recommendation list is fixed and
//! always returned.

use crate::model::PageMetrics;

/// Result of the cognitive-load analysis.
#[derive(Debug, Clone)]
pub struct CognitiveAnalysis {
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl CognitiveAnalysis {
    /// Neutral result for scans that did not request cognitive analysis.
    pub fn neutral() -> Self {
        Self {
            score: 100,
            issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Analyze cognitive load from page structure metrics.
pub fn analyze(metrics: &PageMetrics) -> CognitiveAnalysis {
    let mut issues = Vec::new();
    let mut score: i32 = 100;

    // Density per notional 50-element screen.
    let screens = (metrics.total_elements.div_ceil(50)).max(1);
    let elements_per_screen = metrics.total_elements as f64 / screens as f64;
    if elements_per_screen > 30.0 {
        issues.push("High element density may cause cognitive overload".to_string());
        score -= 10;
    }

    if metrics.link_count > 10 {
        issues.push("Many links may lack sufficient context".to_string());
        score -= 10;
    }

    if !metrics.has_help_text && metrics.form_elements > 3 {
        issues.push("Complex forms lack contextual help".to_string());
        score -= 10;
    }

    if metrics.has_autoplay {
        issues.push("Autoplay content may disrupt focus and concentration".to_string());
        score -= 10;
    }

    if metrics.heading_tags.is_empty() {
        issues.push("No heading structure for content navigation".to_string());
        score -= 25;
    }

    let recommendations = vec![
        "Use clear, consistent navigation patterns".to_string(),
        "Provide contextual help and explanations".to_string(),
        "Implement error prevention and clear error messages".to_string(),
        "Use progressive disclosure for complex information".to_string(),
        "Provide multiple ways to access the same information".to_string(),
    ];

    CognitiveAnalysis {
        score: score.max(0) as u32,
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_structured_page() -> PageMetrics {
        PageMetrics {
            total_elements: 60,
            form_elements: 2,
            link_count: 8,
            heading_tags: vec!["H1".to_string(), "H2".to_string()],
            has_help_text: true,
            ..PageMetrics::default()
        }
    }

    #[test]
    fn test_clean_page_scores_100() {
        let analysis = analyze(&well_structured_page());
        assert_eq!(analysis.score, 100);
        assert!(analysis.issues.is_empty());
        assert_eq!(analysis.recommendations.len(), 5);
    }

    #[test]
    fn test_missing_headings_penalty() {
        let metrics = PageMetrics {
            heading_tags: Vec::new(),
            ..well_structured_page()
        };
        let analysis = analyze(&metrics);
        assert_eq!(analysis.score, 75);
        assert_eq!(analysis.issues.len(), 1);
        assert!(analysis.issues[0].contains("heading structure"));
    }

    #[test]
    fn test_density_penalty() {
        // 40 elements on one notional screen exceeds the 30-element density
        // threshold.
        let metrics = PageMetrics {
            total_elements: 40,
            ..well_structured_page()
        };
        let analysis = analyze(&metrics);
        assert_eq!(analysis.score, 90);
        assert!(analysis.issues[0].contains("element density"));
    }

    #[test]
    fn test_forms_without_help_penalty() {
        let metrics = PageMetrics {
            form_elements: 6,
            has_help_text: false,
            ..well_structured_page()
        };
        let analysis = analyze(&metrics);
        assert_eq!(analysis.score, 90);

        // Help affordances suppress the penalty.
        let metrics = PageMetrics {
            form_elements: 6,
            has_help_text: true,
            ..well_structured_page()
        };
        assert_eq!(analyze(&metrics).score, 100);
    }

    #[test]
    fn test_all_penalties_stack() {
        let metrics = PageMetrics {
            total_elements: 45,
            form_elements: 10,
            link_count: 30,
            heading_tags: Vec::new(),
            has_help_text: false,
            has_autoplay: true,
            ..PageMetrics::default()
        };
        let analysis = analyze(&metrics);
        // 100 - 10 - 10 - 10 - 10 - 25
        assert_eq!(analysis.score, 35);
        assert_eq!(analysis.issues.len(), 5);
    }

    #[test]
    fn test_empty_page_does_not_trip_density() {
        let metrics = PageMetrics::default();
        let analysis = analyze(&metrics);
        // Only the missing-headings penalty applies to an empty page.
        assert_eq!(analysis.score, 75);
    }
}
