use std::path::PathBuf;

use anyhow::Result;
use crawlcost_config::Config;

pub async fn handle(
    config: &Config,
    doc_id: &str,
    docs_dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let auditor = super::document_auditor(config, docs_dir)?;
    let report = auditor.audit_document(doc_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    super::print_document_report(&report);

    Ok(())
}
