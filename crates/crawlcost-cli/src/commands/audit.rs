use anyhow::Result;
use crawlcost_config::Config;
use crawlcost_core::Verdict;
use crawlcost_fetch::UrlAuditor;

pub async fn handle(config: &Config, url: &str, json: bool) -> Result<()> {
    let auditor = UrlAuditor::new(super::fetch_options(config))?;
    let report = auditor.audit(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let verdict = Verdict::from_ratio(report.ratio);

    println!("Efficiency score: {}/100 ({})", report.efficiency_score, verdict.label());
    println!("  Token cost:      {} tokens", report.total_tokens);
    println!("  Content tokens:  {} tokens", report.content_tokens);
    println!("  Wasted spend:    {} tokens", report.wasted_spend);
    println!("  Signal-to-noise: {:.2}%", report.ratio);
    println!("  Bot latency:     {} ms", report.latency_ms);
    println!("  HTML size:       {} bytes", report.html_size);
    println!();
    println!("{}", report.snippet);
    println!();
    println!("Token counts are estimates (4 characters per token), not real tokenizer output.");

    Ok(())
}
