// SPDX-License-Identifier: PMPL-1.0-or-later
//! Navigation analyzer - WCAG 2.4.1 Bypass Blocks, 2.1.4 Character Key
//! Shortcuts.
//!
//! Checks the page's navigation robustness: skip links, landmark structure,
//! a consistent nav element, and keyboard shortcuts for focus-heavy
//! interfaces.

use crate::model::PageMetrics;

/// Result of the navigation analysis.
#[derive(Debug, Clone)]
pub struct NavigationAnalysis {
    pub score: u32,
    pub keyboard_support: bool,
    pub skip_links: bool,
    pub landmark_structure: bool,
    pub consistent_navigation: bool,
    pub issues: Vec<String>,
}

impl NavigationAnalysis {
    /// Neutral result for scans that did not request navigation analysis.
    pub fn neutral() -> Self {
        Self {
            score: 100,
            keyboard_support: true,
            skip_links: true,
            landmark_structure: true,
            consistent_navigation: true,
            issues: Vec::new(),
        }
    }
}

/// Analyze navigation robustness.
pub fn analyze(metrics: &PageMetrics) -> NavigationAnalysis {
    let mut issues = Vec::new();
    let mut score: i32 = 100;

    if !metrics.has_skip_links {
        issues.push("No skip links for keyboard navigation".to_string());
        score -= 20;
    }

    if !metrics.has_landmarks {
        issues.push("Page lacks proper landmark structure".to_string());
        score -= 25;
    }

    if !metrics.has_nav {
        issues.push("No consistent navigation structure".to_string());
        score -= 15;
    }

    if metrics.focusable_elements > 20 && !metrics.has_custom_shortcuts {
        issues.push("Complex interface lacks keyboard shortcuts".to_string());
        score -= 10;
    }

    NavigationAnalysis {
        score: score.max(0) as u32,
        keyboard_support: metrics.focusable_elements > 0,
        skip_links: metrics.has_skip_links,
        landmark_structure: metrics.has_landmarks,
        consistent_navigation: metrics.has_nav,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigable_page() -> PageMetrics {
        PageMetrics {
            has_skip_links: true,
            has_landmarks: true,
            has_nav: true,
            focusable_elements: 12,
            ..PageMetrics::default()
        }
    }

    #[test]
    fn test_navigable_page_scores_100() {
        let analysis = analyze(&navigable_page());
        assert_eq!(analysis.score, 100);
        assert!(analysis.keyboard_support);
        assert!(analysis.issues.is_empty());
    }

    #[test]
    fn test_bare_page_loses_all_structure_points() {
        let analysis = analyze(&PageMetrics::default());
        // -20 skip links, -25 landmarks, -15 nav
        assert_eq!(analysis.score, 40);
        assert_eq!(analysis.issues.len(), 3);
        assert!(!analysis.keyboard_support);
    }

    #[test]
    fn test_focus_heavy_page_needs_shortcuts() {
        let metrics = PageMetrics {
            focusable_elements: 35,
            ..navigable_page()
        };
        let analysis = analyze(&metrics);
        assert_eq!(analysis.score, 90);
        assert!(analysis.issues[0].contains("keyboard shortcuts"));

        let metrics = PageMetrics {
            focusable_elements: 35,
            has_custom_shortcuts: true,
            ..navigable_page()
        };
        assert_eq!(analyze(&metrics).score, 100);
    }
}
