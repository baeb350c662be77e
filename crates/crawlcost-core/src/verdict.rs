use serde::{Deserialize, Serialize};

/// Qualitative banding of the efficiency ratio.
///
/// One threshold table for every caller:
///
/// | efficiency          | verdict  |
/// |---------------------|----------|
/// | `ratio > 50`        | Healthy  |
/// | `20 <= ratio <= 50` | Moderate |
/// | `ratio < 20`        | Bloated  |
///
/// Exactly 50 falls in the Moderate band (strict `>` on the Healthy cutoff).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Healthy,
    Moderate,
    Bloated,
}

impl Verdict {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 50.0 {
            Verdict::Healthy
        } else if ratio >= 20.0 {
            Verdict::Moderate
        } else {
            Verdict::Bloated
        }
    }

    /// Short label for CLI and admin surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Healthy => "Healthy",
            Verdict::Moderate => "Moderate",
            Verdict::Bloated => "Bloated",
        }
    }

    /// One-line explanation of the band.
    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Healthy => "Healthy text density",
            Verdict::Moderate => "Moderate text density",
            Verdict::Bloated => "Too much HTML bloat",
        }
    }
}
