//! Token estimation using the 4-characters-per-token heuristic.
//!
//! This is a deliberately crude proxy for LLM ingestion cost, not a real
//! tokenizer. The verdict thresholds downstream are calibrated against this
//! exact ratio, so it must not be swapped for a BPE encoder without
//! recalibrating them.

/// Approximate characters per token for typical web text.
const CHARS_PER_TOKEN: usize = 4;

/// Character-count token estimator (1 token ~= 4 characters).
#[derive(Debug, Clone, Copy)]
pub struct TokenEstimator;

impl TokenEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate token count for a single string.
    ///
    /// Counts Unicode scalar values rather than bytes so multi-byte text is
    /// not inflated. Ceiling division; the empty string is zero tokens.
    pub fn estimate(&self, text: &str) -> usize {
        text.chars().count().div_ceil(CHARS_PER_TOKEN)
    }

    /// Estimate tokens for multiple strings (batch processing).
    pub fn estimate_batch(&self, texts: &[&str]) -> Vec<usize> {
        texts.iter().map(|text| self.estimate(text)).collect()
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new()
    }
}
