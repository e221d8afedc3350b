// SPDX-License-Identifier: PMPL-1.0-or-later
//! Content heuristic analyzers.
//!
//! Each analyzer is a pure function from a [`PageMetrics`] bag to a 0-100
//! sub-score plus a list of textual issues. The four analyzers are mutually
//! independent: they share no state and may run in any order. Analyzers that
//! are not selected for a scan contribute a neutral result (score 100) so
//! they never depress the aggregate.
//!
//! - **Reading level** (3.1.5): Flesch Reading Ease of the extracted body text
//! - **Cognitive load**: element density, link context, form help, autoplay,
//!   heading structure
//! - **Multimedia** (1.2.x): captions, audio descriptions, alt text, sign
//!   language
//! - **Navigation** (2.4.1, 2.1.4): skip links, landmarks, nav elements,
//!   keyboard shortcuts
//!
//! [`PageMetrics`]: crate::model::PageMetrics

pub mod cognitive;
pub mod multimedia;
pub mod navigation;
pub mod reading_level;

pub use cognitive::CognitiveAnalysis;
pub use multimedia::MultimediaAnalysis;
pub use navigation::NavigationAnalysis;
pub use reading_level::ReadingLevelAnalysis;
