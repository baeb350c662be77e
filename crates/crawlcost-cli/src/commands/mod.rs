use std::path::PathBuf;
use std::time::Duration;

use crawlcost_config::Config;
use crawlcost_engine::{DocumentAuditor, DocumentReport};
use crawlcost_fetch::FetchOptions;
use crawlcost_store::FsStore;

pub mod audit;
pub mod scan;
pub mod score;
pub mod serve;

pub(crate) fn fetch_options(config: &Config) -> FetchOptions {
    let defaults = FetchOptions::default();
    FetchOptions {
        timeout: Duration::from_secs(config.fetch.timeout_secs),
        max_redirects: config.fetch.max_redirects,
        user_agent: config
            .fetch
            .user_agent
            .clone()
            .unwrap_or(defaults.user_agent),
    }
}

pub(crate) fn document_auditor(
    config: &Config,
    docs_dir: Option<PathBuf>,
) -> anyhow::Result<DocumentAuditor<FsStore>> {
    let dir = docs_dir.unwrap_or_else(|| config.store.docs_dir.clone());
    Ok(DocumentAuditor::new(FsStore::new(dir)?))
}

pub(crate) fn print_document_report(report: &DocumentReport) {
    let metrics = &report.metrics;
    println!("{}:", report.id);
    println!("  Total cost:      {} tokens", metrics.total_tokens);
    println!("  Useful content:  {} tokens", metrics.content_tokens);
    println!("  Code bloat:      {} tokens", metrics.code_bloat);
    println!("  Signal-to-noise: {:.1}%", metrics.efficiency);
    println!(
        "  Verdict:         {} ({})",
        metrics.verdict.label(),
        metrics.verdict.summary()
    );
}
