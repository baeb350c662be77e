//! Remote-mode fetch pipeline.
//!
//! Validates a user-supplied URL, fetches it under a hard timeout and
//! redirect budget, measures perceived bot latency, and scores the body
//! with the metrics engine. One fetch attempt per request; transient
//! failures surface directly to the caller.

use std::time::{Duration, Instant};

use tracing::info;
use url::Url;

use crawlcost_core::{AuditError, AuditReport, Result};
use crawlcost_engine::MetricsEngine;

/// Identifying user-agent sent with every outbound fetch.
pub const USER_AGENT: &str = concat!(
    "crawlcost/",
    env!("CARGO_PKG_VERSION"),
    " (crawl budget auditor)"
);

/// Outbound fetch constraints. The timeout is a hard upper bound on the
/// whole request; hitting it is a normal recoverable error.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(12),
            max_redirects: 3,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Raw fetch result before scoring.
#[derive(Debug)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
    /// Byte length of the raw body, before any decoding.
    pub body_bytes: usize,
    pub latency_ms: u64,
}

/// Fetches URLs and scores their payloads.
///
/// The reqwest client is built once and shared; concurrent audits share
/// only its connection pool.
pub struct UrlAuditor {
    client: reqwest::Client,
    engine: MetricsEngine,
}

impl UrlAuditor {
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .redirect(reqwest::redirect::Policy::limited(options.max_redirects))
            .build()
            .map_err(|e| AuditError::Other(anyhow::anyhow!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            engine: MetricsEngine::new(),
        })
    }

    /// Parse and validate a user-supplied URL.
    ///
    /// Only absolute http/https URLs are accepted; anything else is a user
    /// input error and no network call is made.
    pub fn validate_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw.trim())
            .map_err(|_| AuditError::InvalidUrl(format!("not an absolute URL: {raw}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AuditError::InvalidUrl(format!(
                "unsupported scheme: {other}"
            ))),
        }
    }

    /// Single-attempt fetch with wall-clock latency measurement.
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let start = Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|_| AuditError::FetchFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::UpstreamHttp(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|_| AuditError::FetchFailed)?;
        let latency_ms = start.elapsed().as_millis() as u64;

        let body_bytes = body.len();
        let body = String::from_utf8_lossy(&body).into_owned();

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
            body_bytes,
            latency_ms,
        })
    }

    /// Validate, fetch, score, and assemble the wire report.
    pub async fn audit(&self, raw_url: &str) -> Result<AuditReport> {
        let url = Self::validate_url(raw_url)?;
        let page = self.fetch(&url).await?;

        let audit = self.engine.audit(&page.body);
        let report = AuditReport::new(
            &audit.metrics,
            &audit.visible_text,
            page.latency_ms,
            page.body_bytes,
        );

        info!(
            %url,
            latency_ms = page.latency_ms,
            score = report.efficiency_score,
            "audited URL"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_and_garbage_urls() {
        for raw in ["not-a-url", "/relative/path", "example.com", ""] {
            let err = UrlAuditor::validate_url(raw).unwrap_err();
            assert!(matches!(err, AuditError::InvalidUrl(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_rejects_disallowed_schemes() {
        for raw in ["ftp://example.com", "file:///etc/passwd", "javascript:alert(1)"] {
            let err = UrlAuditor::validate_url(raw).unwrap_err();
            assert!(matches!(err, AuditError::InvalidUrl(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_accepts_http_and_https() {
        assert!(UrlAuditor::validate_url("http://example.com").is_ok());
        assert!(UrlAuditor::validate_url("https://example.com/page?q=1").is_ok());
        assert!(UrlAuditor::validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(12));
        assert_eq!(options.max_redirects, 3);
        assert!(options.user_agent.starts_with("crawlcost/"));
    }
}
