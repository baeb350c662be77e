//! Metrics engine: scores HTML payloads and stored documents.
//!
//! The engine is a pure transformation from an HTML string to token
//! metrics; it holds no cross-request state, so concurrent audits need no
//! coordination beyond what the caller's I/O already has.

use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::debug;

use crawlcost_core::{reduce_to_visible_text, PageMetrics, Result, Verdict};
use crawlcost_store::ContentStore;
use crawlcost_tokens::TokenEstimator;

/// Metrics plus the visible text they were derived from. Callers that build
/// snippets need the text; callers that only want numbers use
/// [`MetricsEngine::compute`].
#[derive(Debug, Clone)]
pub struct PageAudit {
    pub metrics: PageMetrics,
    pub visible_text: String,
}

/// Scores a raw HTML payload.
pub struct MetricsEngine {
    estimator: TokenEstimator,
}

impl MetricsEngine {
    pub fn new() -> Self {
        Self {
            estimator: TokenEstimator::new(),
        }
    }

    /// Score a payload.
    ///
    /// `total_tokens` counts the full payload including markup, matching
    /// what a crawler actually ingests; `content_tokens` counts only the
    /// visible text.
    pub fn audit(&self, html: &str) -> PageAudit {
        let total_tokens = self.estimator.estimate(html);
        let visible_text = reduce_to_visible_text(html);
        let content_tokens = self.estimator.estimate(&visible_text);

        // Clamped: the content estimate is not guaranteed to stay below the
        // payload estimate on pathological inputs.
        let code_bloat = total_tokens.saturating_sub(content_tokens);
        let efficiency = if total_tokens > 0 {
            content_tokens as f64 / total_tokens as f64 * 100.0
        } else {
            0.0
        };

        PageAudit {
            metrics: PageMetrics {
                total_tokens,
                content_tokens,
                code_bloat,
                efficiency,
                verdict: Verdict::from_ratio(efficiency),
            },
            visible_text,
        }
    }

    /// Score a payload, discarding the reduced text.
    pub fn compute(&self, html: &str) -> PageMetrics {
        self.audit(html).metrics
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Local-mode metrics for one stored document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub id: String,
    #[serde(flatten)]
    pub metrics: PageMetrics,
    #[serde(with = "time::serde::timestamp")]
    pub computed_at: OffsetDateTime,
}

struct CacheEntry {
    content_hash: blake3::Hash,
    report: DocumentReport,
}

/// Scores stored documents, keeping results until the rendered content
/// changes (cache key: document id, invalidation: blake3 of the HTML).
pub struct DocumentAuditor<S> {
    store: S,
    engine: MetricsEngine,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl<S: ContentStore> DocumentAuditor<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            engine: MetricsEngine::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Render a document from the store and score it. Unchanged content is
    /// served from cache with its original timestamp.
    pub async fn audit_document(&self, doc_id: &str) -> Result<DocumentReport> {
        let html = self.store.render_content(doc_id).await?;
        let content_hash = blake3::hash(html.as_bytes());

        if let Some(entry) = self.cache.read().await.get(doc_id) {
            if entry.content_hash == content_hash {
                debug!(doc_id, "metrics cache hit");
                return Ok(entry.report.clone());
            }
        }

        let metrics = self.engine.compute(&html);
        let report = DocumentReport {
            id: doc_id.to_string(),
            metrics,
            computed_at: OffsetDateTime::now_utc(),
        };

        self.cache.write().await.insert(
            doc_id.to_string(),
            CacheEntry {
                content_hash,
                report: report.clone(),
            },
        );

        Ok(report)
    }

    /// Score every stored document.
    pub async fn audit_all(&self) -> Result<Vec<DocumentReport>> {
        let mut reports = Vec::new();
        for id in self.store.list_documents().await? {
            reports.push(self.audit_document(&id).await?);
        }
        Ok(reports)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn test_compute_splits_markup_from_content() {
        let engine = MetricsEngine::new();
        let metrics = engine.compute("<html><body>hi</body></html>");

        // 28 payload characters, 2 visible ones.
        assert_eq!(metrics.total_tokens, 7);
        assert_eq!(metrics.content_tokens, 1);
        assert_eq!(metrics.code_bloat, 6);
    }

    #[test]
    fn test_empty_payload_is_all_zero() {
        let engine = MetricsEngine::new();
        let metrics = engine.compute("");

        assert_eq!(metrics.total_tokens, 0);
        assert_eq!(metrics.content_tokens, 0);
        assert_eq!(metrics.code_bloat, 0);
        assert_eq!(metrics.efficiency, 0.0);
        assert_eq!(metrics.verdict, Verdict::Bloated);
    }

    #[test]
    fn test_script_bodies_do_not_count_as_content() {
        let engine = MetricsEngine::new();
        let audit = engine.audit("<script>var x = 1;</script>Text");

        assert!(!audit.visible_text.contains("var x"));
        // "Text" only: one token.
        assert_eq!(audit.metrics.content_tokens, 1);
    }

    #[test]
    fn test_bloat_never_negative() {
        let engine = MetricsEngine::new();

        for html in ["", "x", "&amp;", "<p>a</p>", "<!-- -->"] {
            let metrics = engine.compute(html);
            assert!(metrics.code_bloat <= metrics.total_tokens);
        }
    }

    #[test]
    fn test_plain_text_is_healthy() {
        let engine = MetricsEngine::new();
        let metrics = engine.compute("just some plain words with no markup at all");

        assert_eq!(metrics.efficiency, 100.0);
        assert_eq!(metrics.verdict, Verdict::Healthy);
    }

    /// In-memory store so cache behavior is observable.
    struct MemStore {
        docs: Mutex<HashMap<String, String>>,
    }

    impl MemStore {
        fn new() -> Self {
            Self {
                docs: Mutex::new(HashMap::new()),
            }
        }

        fn put(&self, id: &str, html: &str) {
            self.docs
                .lock()
                .unwrap()
                .insert(id.to_string(), html.to_string());
        }
    }

    #[async_trait]
    impl ContentStore for &MemStore {
        async fn render_content(&self, doc_id: &str) -> Result<String> {
            self.docs
                .lock()
                .unwrap()
                .get(doc_id)
                .cloned()
                .ok_or_else(|| {
                    crawlcost_core::AuditError::DocumentNotFound(doc_id.to_string())
                })
        }

        async fn list_documents(&self) -> Result<Vec<String>> {
            let mut ids: Vec<String> = self.docs.lock().unwrap().keys().cloned().collect();
            ids.sort();
            Ok(ids)
        }
    }

    #[tokio::test]
    async fn test_cache_hit_on_unchanged_content() {
        let store = MemStore::new();
        store.put("home", "<p>welcome</p>");

        let auditor = DocumentAuditor::new(&store);
        let first = auditor.audit_document("home").await.unwrap();
        let second = auditor.audit_document("home").await.unwrap();

        assert_eq!(first.computed_at, second.computed_at);
        assert_eq!(first.metrics.total_tokens, second.metrics.total_tokens);
    }

    #[tokio::test]
    async fn test_cache_invalidated_on_content_change() {
        let store = MemStore::new();
        store.put("home", "<p>welcome</p>");

        let auditor = DocumentAuditor::new(&store);
        let first = auditor.audit_document("home").await.unwrap();

        store.put("home", "<p>welcome back, this page grew</p>");
        let second = auditor.audit_document("home").await.unwrap();

        assert!(second.metrics.total_tokens > first.metrics.total_tokens);
    }

    #[tokio::test]
    async fn test_audit_all_covers_every_document() {
        let store = MemStore::new();
        store.put("a", "<p>alpha</p>");
        store.put("b", "<p>beta</p>");

        let auditor = DocumentAuditor::new(&store);
        let reports = auditor.audit_all().await.unwrap();

        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_document_report_flattens_metrics() {
        let engine = MetricsEngine::new();
        let report = DocumentReport {
            id: "home".to_string(),
            metrics: engine.compute("<p>hello there</p>"),
            computed_at: OffsetDateTime::UNIX_EPOCH,
        };

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("total_tokens").is_some());
        assert!(value.get("verdict").is_some());
        assert_eq!(value["id"], "home");
    }
}
