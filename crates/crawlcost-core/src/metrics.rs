use serde::{Deserialize, Serialize};

use crate::Verdict;

/// Token accounting for one rendered payload.
///
/// `total_tokens` covers the full payload including markup (what a crawler
/// actually ingests); `content_tokens` covers only the visible text.
/// `code_bloat` is clamped at zero rather than assumed non-negative, since
/// pathological inputs can push the content estimate past the payload
/// estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetrics {
    pub total_tokens: usize,
    pub content_tokens: usize,
    pub code_bloat: usize,
    /// Percentage of total tokens that are visible-content tokens, in
    /// `[0, 100]`. Exactly `0.0` for an empty payload.
    pub efficiency: f64,
    pub verdict: Verdict,
}
