//! Remote-mode audit report as exposed over the request/response boundary.

use serde::{Deserialize, Serialize};

use crate::PageMetrics;

/// Fixed snippet shown when a page has no readable text at all.
pub const EMPTY_SNIPPET: &str = "No readable text detected on this page.";

/// Maximum snippet length in characters.
const SNIPPET_CHARS: usize = 200;

/// Wire shape of a remote audit. Field names are part of the public
/// contract; token counts are estimates (4 characters per token), not real
/// tokenizer output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Efficiency ratio rounded to an integer, 0..=100.
    pub efficiency_score: u8,
    /// Efficiency ratio rounded to 2 decimal places.
    pub ratio: f64,
    pub total_tokens: usize,
    pub content_tokens: usize,
    pub wasted_spend: usize,
    pub latency_ms: u64,
    pub html_size: usize,
    pub snippet: String,
}

impl AuditReport {
    /// Assemble the wire report from computed metrics plus transport facts.
    pub fn new(
        metrics: &PageMetrics,
        visible_text: &str,
        latency_ms: u64,
        html_size: usize,
    ) -> Self {
        Self {
            efficiency_score: metrics.efficiency.round() as u8,
            ratio: (metrics.efficiency * 100.0).round() / 100.0,
            total_tokens: metrics.total_tokens,
            content_tokens: metrics.content_tokens,
            wasted_spend: metrics.code_bloat,
            latency_ms,
            html_size,
            snippet: snippet(visible_text),
        }
    }
}

/// First 200 characters of the visible text, or the fixed placeholder when
/// the text is empty.
pub fn snippet(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_SNIPPET.to_string();
    }
    text.chars().take(SNIPPET_CHARS).collect()
}
