use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crawlcost")]
#[command(about = "Estimate LLM crawl cost of web pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a URL and score its payload
    Audit {
        /// Absolute http/https URL to audit
        url: String,

        /// Print the raw report JSON
        #[arg(long)]
        json: bool,
    },

    /// Score one stored document (local mode)
    Score {
        /// Document identifier (file stem in the documents directory)
        doc_id: String,

        /// Documents directory (default from config)
        #[arg(long)]
        docs_dir: Option<PathBuf>,

        /// Print the metrics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every stored document
    Scan {
        /// Documents directory (default from config)
        #[arg(long)]
        docs_dir: Option<PathBuf>,

        /// Print the metrics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the audit HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Documents directory (default from config)
        #[arg(long)]
        docs_dir: Option<PathBuf>,
    },
}
