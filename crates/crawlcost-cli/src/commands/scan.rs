use std::path::PathBuf;

use anyhow::Result;
use crawlcost_config::Config;

pub async fn handle(config: &Config, docs_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let auditor = super::document_auditor(config, docs_dir)?;
    let reports = auditor.audit_all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("No documents found.");
        return Ok(());
    }

    for report in &reports {
        super::print_document_report(report);
        println!();
    }

    Ok(())
}
