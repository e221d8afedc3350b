// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for complybot

use thiserror::Error;

/// Main error type for a scan run.
///
/// Per-finding and per-analyzer anomalies are recovered locally (conservative
/// classifier defaults, neutral analyzer results); only total inability to
/// obtain findings or page metrics surfaces here and fails the scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("finding source error: {0}")]
    FindingSource(anyhow::Error),

    #[error("metrics source error: {0}")]
    MetricsSource(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
