use thiserror::Error;

/// Failure taxonomy for audit operations.
///
/// Every variant is recoverable and surfaced once per request; nothing here
/// is fatal to the process. The pure computation path (estimator, reducer,
/// metrics) has no error conditions at all.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Malformed URL or disallowed scheme. User input error; the reason is
    /// reported verbatim to the caller.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network-layer failure (timeout, DNS, refused connection, TLS). The
    /// message stays generic; transport detail is not leaked to the caller.
    #[error("Unable to fetch that URL. Please try another page.")]
    FetchFailed,

    /// The target responded with a non-2xx status.
    #[error("The server returned an error (HTTP {0}).")]
    UpstreamHttp(u16),

    /// Local mode: no stored document under that identifier.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
