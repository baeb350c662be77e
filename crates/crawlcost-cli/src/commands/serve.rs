use std::path::PathBuf;

use anyhow::Result;
use crawlcost_config::Config;
use crawlcost_fetch::UrlAuditor;

pub async fn handle(
    config: &Config,
    host: Option<String>,
    port: Option<u16>,
    docs_dir: Option<PathBuf>,
) -> Result<()> {
    let urls = UrlAuditor::new(super::fetch_options(config))?;
    let documents = super::document_auditor(config, docs_dir)?;

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    crawlcost_server::serve(urls, documents, &host, port).await
}
