// SPDX-License-Identifier: PMPL-1.0-or-later
//! Finding classifier: maps one raw finding to a severity, category,
//! criterion label, and remediation text.
//!
//! Pure and deterministic. The lookup tables are immutable data built once
//! at engine construction and passed by reference; the classifier never
//! rejects a finding - unknown impacts, tags, and rule ids all fall through
//! to conservative defaults.

use crate::model::{Impact, RawFinding, Severity};

/// Rule-checker tags mapped to canonical WCAG success-criterion labels.
/// First tag present on the finding wins.
const CRITERIA: &[(&str, &str)] = &[
    ("wcag111", "WCAG 2.1 A - 1.1.1 Non-text Content"),
    ("wcag141", "WCAG 2.1 A - 1.4.1 Use of Color"),
    ("wcag143", "WCAG 2.1 AA - 1.4.3 Contrast (Minimum)"),
    ("wcag146", "WCAG 2.1 AAA - 1.4.6 Contrast (Enhanced)"),
    ("wcag148", "WCAG 2.1 AAA - 1.4.8 Visual Presentation"),
    ("wcag211", "WCAG 2.1 A - 2.1.1 Keyboard"),
    ("wcag212", "WCAG 2.1 A - 2.1.2 No Keyboard Trap"),
    ("wcag214", "WCAG 2.1 AAA - 2.1.4 Character Key Shortcuts"),
    ("wcag241", "WCAG 2.1 A - 2.4.1 Bypass Blocks"),
    ("wcag242", "WCAG 2.1 A - 2.4.2 Page Titled"),
    ("wcag243", "WCAG 2.1 A - 2.4.3 Focus Order"),
    ("wcag244", "WCAG 2.1 A - 2.4.4 Link Purpose (In Context)"),
    ("wcag245", "WCAG 2.1 AA - 2.4.5 Multiple Ways"),
    ("wcag246", "WCAG 2.1 AA - 2.4.6 Headings and Labels"),
    ("wcag247", "WCAG 2.1 AA - 2.4.7 Focus Visible"),
    ("wcag248", "WCAG 2.1 AAA - 2.4.8 Location"),
    ("wcag249", "WCAG 2.1 AAA - 2.4.9 Link Purpose (Link Only)"),
    ("wcag2410", "WCAG 2.1 AAA - 2.4.10 Section Headings"),
    ("wcag321", "WCAG 2.1 A - 3.2.1 On Focus"),
    ("wcag322", "WCAG 2.1 A - 3.2.2 On Input"),
    ("wcag323", "WCAG 2.1 AA - 3.2.3 Consistent Navigation"),
    ("wcag324", "WCAG 2.1 AA - 3.2.4 Consistent Identification"),
    ("wcag325", "WCAG 2.1 AAA - 3.2.5 Change on Request"),
    ("wcag331", "WCAG 2.1 A - 3.3.1 Error Identification"),
    ("wcag332", "WCAG 2.1 A - 3.3.2 Labels or Instructions"),
    ("wcag333", "WCAG 2.1 AA - 3.3.3 Error Suggestion"),
    ("wcag334", "WCAG 2.1 AA - 3.3.4 Error Prevention (Legal, Financial, Data)"),
    ("wcag335", "WCAG 2.1 AAA - 3.3.5 Help"),
    ("wcag336", "WCAG 2.1 AAA - 3.3.6 Error Prevention (All)"),
    ("wcag411", "WCAG 2.1 A - 4.1.1 Parsing"),
    ("wcag412", "WCAG 2.1 A - 4.1.2 Name, Role, Value"),
    ("wcag413", "WCAG 2.1 AA - 4.1.3 Status Messages"),
];

/// Rule-id keyed remediation texts.
const RULE_FIXES: &[(&str, &str)] = &[
    ("color-contrast", "Ensure color contrast ratio meets WCAG AAA standards (7:1 for normal text, 4.5:1 for large text). Consider implementing high contrast mode toggle."),
    ("image-alt", "Provide comprehensive alt text that describes both the image content and its purpose. For decorative images, use empty alt=\"\" or aria-hidden=\"true\"."),
    ("link-name", "Use descriptive link text that clearly indicates the destination or purpose. Avoid generic terms like \"click here\" or \"read more\"."),
    ("button-name", "Ensure buttons have clear, descriptive names via text content, aria-label, or aria-labelledby. Include action context."),
    ("form-field-multiple-labels", "Use a single, clear label for each form field. Implement fieldset and legend for grouped fields."),
    ("heading-order", "Maintain logical heading hierarchy (h1\u{2192}h2\u{2192}h3) for screen reader navigation and cognitive clarity."),
    ("landmark-unique", "Provide unique, descriptive names for landmarks using aria-label or aria-labelledby for better navigation."),
    ("aria-hidden-focus", "Never hide focusable elements from screen readers. Use visible focus indicators and proper focus management."),
    ("tabindex", "Avoid positive tabindex values. Use tabindex=\"0\" for programmatically focusable elements, \"-1\" for programmatic focus only."),
    ("page-has-heading-one", "Include exactly one h1 element per page that describes the main content or purpose."),
    ("region", "Wrap all page content in appropriate landmarks (main, nav, aside, footer) for better screen reader navigation."),
    ("skip-link", "Implement visible skip links that allow keyboard users to bypass repetitive navigation."),
    ("focus-order-semantics", "Ensure focus order follows logical reading sequence and matches visual layout."),
    ("label-content-name-mismatch", "Ensure visible text labels match accessible names for voice control users."),
];

/// Category-keyed remediation fallbacks.
const CATEGORY_FIXES: &[(&str, &str)] = &[
    ("Cognitive & Reading", "Consider reading level, cognitive load, and content complexity. Use clear language, short sentences, and logical information hierarchy."),
    ("Visual Accessibility", "Implement multiple visual cues beyond color. Consider text spacing, font choices, and high contrast options."),
    ("Multimedia", "Provide comprehensive multimedia alternatives: captions, transcripts, audio descriptions, and sign language interpretation where appropriate."),
    ("Navigation & Usability", "Ensure consistent navigation patterns, clear error messages, and robust keyboard support throughout the interface."),
    ("Enhanced Navigation", "Implement advanced ARIA patterns, custom keyboard shortcuts, and clear focus management for complex interactions."),
];

const GENERIC_FIX: &str =
    "Review WCAG 2.1 AAA guidelines and implement comprehensive accessibility improvements for this issue.";

/// Immutable classifier configuration, built once at process start.
#[derive(Debug)]
pub struct ClassifierTables {
    criteria: &'static [(&'static str, &'static str)],
    rule_fixes: &'static [(&'static str, &'static str)],
    category_fixes: &'static [(&'static str, &'static str)],
}

impl Default for ClassifierTables {
    fn default() -> Self {
        Self {
            criteria: CRITERIA,
            rule_fixes: RULE_FIXES,
            category_fixes: CATEGORY_FIXES,
        }
    }
}

/// Classification result for one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub severity: Severity,
    pub category: &'static str,
    pub sub_category: &'static str,
    pub criterion: String,
    pub remediation: String,
}

/// Classify one raw finding.
pub fn classify(tables: &ClassifierTables, finding: &RawFinding) -> Classification {
    let severity = severity_for(finding.impact);
    let (category, sub_category) = categorize(&finding.tags, &finding.id);
    let criterion = criterion_for(tables, &finding.tags, &finding.id);
    let remediation = remediation_for(tables, &finding.id, category);
    Classification {
        severity,
        category,
        sub_category,
        criterion,
        remediation,
    }
}

/// Map a rule-checker impact to an issue severity. Fail-safe: anything
/// unrecognized is minor.
pub fn severity_for(impact: Impact) -> Severity {
    match impact {
        Impact::Critical => Severity::Critical,
        Impact::Serious => Severity::Major,
        Impact::Moderate | Impact::Minor | Impact::Unknown => Severity::Minor,
    }
}

/// Ordered category rules, first match wins.
///
/// The ordering is a design contract: categories drive downstream UI
/// grouping, so reclassification must preserve it exactly.
pub fn categorize(tags: &[String], rule_id: &str) -> (&'static str, &'static str) {
    let has = |tag: &str| tags.iter().any(|t| t == tag);

    if has("color-contrast") || rule_id.contains("contrast") {
        return ("Visual Accessibility", "Color Contrast");
    }
    if has("wcag2a") && has("cat.text-alternatives") {
        return ("Multimedia", "Alternative Text");
    }
    if has("keyboard") || rule_id.contains("keyboard") {
        return ("Navigation & Usability", "Keyboard Navigation");
    }
    if has("cat.aria") || rule_id.contains("aria") {
        return ("Enhanced Navigation", "ARIA Support");
    }
    if has("cat.structure") || rule_id.contains("heading") {
        return ("Cognitive & Reading", "Content Structure");
    }
    if has("cat.name-role-value") {
        return ("Navigation & Usability", "Element Identification");
    }
    if has("cat.forms") {
        return ("Enhanced Navigation", "Form Accessibility");
    }
    if has("cat.tables") {
        return ("Cognitive & Reading", "Data Tables");
    }
    if has("cat.time-based-media") {
        return ("Multimedia", "Time-Based Media");
    }
    if has("cat.language") {
        return ("Cognitive & Reading", "Language & Readability");
    }

    ("General Compliance", "Other")
}

/// Resolve the canonical criterion label for a finding.
///
/// Lookup order: specific criterion tag, AODA id-substring extensions,
/// broadest conformance tier tag, generic label.
fn criterion_for(tables: &ClassifierTables, tags: &[String], rule_id: &str) -> String {
    for tag in tags {
        if let Some((_, label)) = tables.criteria.iter().find(|(t, _)| *t == tag.as_str()) {
            return (*label).to_string();
        }
    }

    if rule_id.contains("reading-level") || rule_id.contains("cognitive") {
        return "AODA - Cognitive & Reading Support".to_string();
    }
    if rule_id.contains("sign-language") || rule_id.contains("multimedia") {
        return "AODA - Multimedia Accessibility".to_string();
    }

    let has = |tag: &str| tags.iter().any(|t| t == tag);
    if has("wcag2aaa") {
        return "WCAG 2.1 AAA".to_string();
    }
    if has("wcag2aa") {
        return "WCAG 2.1 AA".to_string();
    }
    if has("wcag2a") {
        return "WCAG 2.1 A".to_string();
    }

    "WCAG 2.1 Enhanced".to_string()
}

/// Remediation text: rule-id table, then category table, then a generic
/// sentence. Never fails.
fn remediation_for(tables: &ClassifierTables, rule_id: &str, category: &str) -> String {
    if let Some((_, fix)) = tables.rule_fixes.iter().find(|(id, _)| *id == rule_id) {
        return (*fix).to_string();
    }
    if let Some((_, fix)) = tables.category_fixes.iter().find(|(cat, _)| *cat == category) {
        return (*fix).to_string();
    }
    GENERIC_FIX.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AffectedNode;

    fn finding(id: &str, impact: Impact, tags: &[&str]) -> RawFinding {
        RawFinding {
            id: id.to_string(),
            impact,
            description: "desc".to_string(),
            help: "help".to_string(),
            help_url: "https://dequeuniversity.com/rules".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            nodes: vec![AffectedNode { html: "<div>".to_string() }],
        }
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(severity_for(Impact::Critical), Severity::Critical);
        assert_eq!(severity_for(Impact::Serious), Severity::Major);
        assert_eq!(severity_for(Impact::Moderate), Severity::Minor);
        assert_eq!(severity_for(Impact::Minor), Severity::Minor);
        assert_eq!(severity_for(Impact::Unknown), Severity::Minor);
    }

    #[test]
    fn test_category_first_match_wins() {
        // Contrast rule is tested before ARIA, so a finding carrying both
        // classifies as contrast.
        let (category, sub) = categorize(
            &["color-contrast".to_string(), "cat.aria".to_string()],
            "aria-contrast",
        );
        assert_eq!(category, "Visual Accessibility");
        assert_eq!(sub, "Color Contrast");
    }

    #[test]
    fn test_category_by_rule_id_substring() {
        let (category, sub) = categorize(&[], "empty-heading");
        assert_eq!(category, "Cognitive & Reading");
        assert_eq!(sub, "Content Structure");
    }

    #[test]
    fn test_category_alt_text_needs_both_tags() {
        let (category, _) = categorize(&["cat.text-alternatives".to_string()], "image-alt");
        assert_ne!(category, "Multimedia");

        let (category, sub) = categorize(
            &["wcag2a".to_string(), "cat.text-alternatives".to_string()],
            "image-alt",
        );
        assert_eq!(category, "Multimedia");
        assert_eq!(sub, "Alternative Text");
    }

    #[test]
    fn test_category_default() {
        let (category, sub) = categorize(&["best-practice".to_string()], "meta-viewport");
        assert_eq!(category, "General Compliance");
        assert_eq!(sub, "Other");
    }

    #[test]
    fn test_criterion_tag_lookup() {
        let tables = ClassifierTables::default();
        let f = finding("color-contrast", Impact::Serious, &["cat.color", "wcag2aa", "wcag143"]);
        let classification = classify(&tables, &f);
        assert_eq!(classification.criterion, "WCAG 2.1 AA - 1.4.3 Contrast (Minimum)");
    }

    #[test]
    fn test_criterion_aoda_fallbacks() {
        let tables = ClassifierTables::default();
        let f = finding("reading-level-check", Impact::Moderate, &[]);
        assert_eq!(
            classify(&tables, &f).criterion,
            "AODA - Cognitive & Reading Support"
        );

        let f = finding("sign-language-missing", Impact::Moderate, &[]);
        assert_eq!(
            classify(&tables, &f).criterion,
            "AODA - Multimedia Accessibility"
        );
    }

    #[test]
    fn test_criterion_tier_fallback_prefers_broadest() {
        let tables = ClassifierTables::default();
        let f = finding("custom-rule", Impact::Minor, &["wcag2a", "wcag2aaa"]);
        assert_eq!(classify(&tables, &f).criterion, "WCAG 2.1 AAA");
    }

    #[test]
    fn test_criterion_generic_fallback() {
        let tables = ClassifierTables::default();
        let f = finding("custom-rule", Impact::Minor, &["best-practice"]);
        assert_eq!(classify(&tables, &f).criterion, "WCAG 2.1 Enhanced");
    }

    #[test]
    fn test_remediation_rule_then_category_then_generic() {
        let tables = ClassifierTables::default();

        let f = finding("image-alt", Impact::Critical, &["wcag2a", "cat.text-alternatives"]);
        let c = classify(&tables, &f);
        assert!(c.remediation.starts_with("Provide comprehensive alt text"));

        // No rule fix, but the category (via aria substring) has one.
        let f = finding("aria-valid-attr", Impact::Serious, &["cat.aria"]);
        let c = classify(&tables, &f);
        assert!(c.remediation.starts_with("Implement advanced ARIA patterns"));

        // Neither table hits: General Compliance has no category fix.
        let f = finding("custom-rule", Impact::Minor, &[]);
        let c = classify(&tables, &f);
        assert!(c.remediation.starts_with("Review WCAG 2.1 AAA guidelines"));
    }

    #[test]
    fn test_classifier_never_rejects() {
        let tables = ClassifierTables::default();
        let f = finding("", Impact::Unknown, &[]);
        let c = classify(&tables, &f);
        assert_eq!(c.severity, Severity::Minor);
        assert_eq!(c.category, "General Compliance");
        assert!(!c.remediation.is_empty());
        assert!(!c.criterion.is_empty());
    }
}
