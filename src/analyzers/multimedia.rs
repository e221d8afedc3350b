// SPDX-License-Identifier: PMPL-1.0-or-later
//! Multimedia analyzer - WCAG 1.2.x time-based media coverage.
//!
//! Checks caption and audio-description coverage for video, alt-text
//! coverage for images, and sign-language provision for any audio/video
//! content.

use crate::model::PageMetrics;

/// Result of the multimedia analysis.
#[derive(Debug, Clone)]
pub struct MultimediaAnalysis {
    pub score: u32,
    pub has_video: bool,
    pub has_audio: bool,
    pub has_sign_language: bool,
    pub has_captions: bool,
    pub has_audio_description: bool,
    pub issues: Vec<String>,
}

impl MultimediaAnalysis {
    /// Neutral result for scans that did not request multimedia analysis.
    pub fn neutral() -> Self {
        Self {
            score: 100,
            has_video: false,
            has_audio: false,
            has_sign_language: false,
            has_captions: false,
            has_audio_description: false,
            issues: Vec::new(),
        }
    }
}

/// Analyze multimedia accessibility coverage.
pub fn analyze(metrics: &PageMetrics) -> MultimediaAnalysis {
    let mut issues = Vec::new();
    let mut score: i32 = 100;

    let has_video = metrics.video_elements > 0;
    let has_audio = metrics.audio_elements > 0;

    if has_video {
        if metrics.videos_with_captions == 0 {
            issues.push("Videos lack captions or subtitles".to_string());
            score -= 15;
        }
        if metrics.videos_with_descriptions == 0 {
            issues.push("Videos lack audio descriptions".to_string());
            score -= 10;
        }
    }

    if metrics.images_without_alt > 0 {
        issues.push(format!(
            "{} images lack alternative text",
            metrics.images_without_alt
        ));
        score -= (metrics.images_without_alt as i32 * 5).min(40);
    }

    if !metrics.has_sign_language && (has_video || has_audio) {
        issues.push("No sign language interpretation available".to_string());
        score -= 10;
    }

    MultimediaAnalysis {
        score: score.max(0) as u32,
        has_video,
        has_audio,
        has_sign_language: metrics.has_sign_language,
        has_captions: metrics.videos_with_captions > 0,
        has_audio_description: metrics.has_audio_description,
        issues,
    }
}
