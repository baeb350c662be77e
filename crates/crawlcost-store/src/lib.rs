//! Content store for local-mode audits.
//!
//! The engine consumes rendered HTML through the [`ContentStore`] trait;
//! [`FsStore`] is the filesystem-backed implementation used by the CLI and
//! server, with one `<id>.html` file per document.

use std::path::PathBuf;

use async_trait::async_trait;
use crawlcost_core::{AuditError, Result};
use walkdir::WalkDir;

/// Supplies fully rendered HTML by document identifier.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fully rendered HTML for a stored document.
    async fn render_content(&self, doc_id: &str) -> Result<String>;

    /// Identifiers of every stored document, sorted.
    async fn list_documents(&self) -> Result<Vec<String>>;
}

/// Directory of rendered documents, one `<id>.html` file each.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, doc_id: &str) -> PathBuf {
        self.root.join(format!("{doc_id}.html"))
    }
}

#[async_trait]
impl ContentStore for FsStore {
    async fn render_content(&self, doc_id: &str) -> Result<String> {
        // Identifiers are plain names; anything path-like stays unresolvable.
        if doc_id.is_empty() || doc_id.contains(['/', '\\']) || doc_id.contains("..") {
            return Err(AuditError::DocumentNotFound(doc_id.to_string()));
        }

        match tokio::fs::read_to_string(self.path_for(doc_id)).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AuditError::DocumentNotFound(doc_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_documents(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AuditError::Other(e.into()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "html") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_content_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("about.html"), "<p>About us</p>").unwrap();

        let store = FsStore::new(dir.path()).unwrap();
        let html = store.render_content("about").await.unwrap();
        assert_eq!(html, "<p>About us</p>");
    }

    #[tokio::test]
    async fn test_unknown_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path()).unwrap();

        let err = store.render_content("missing").await.unwrap_err();
        assert!(matches!(err, AuditError::DocumentNotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_path_like_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path()).unwrap();

        for id in ["../secret", "a/b", "a\\b", ""] {
            let err = store.render_content(id).await.unwrap_err();
            assert!(matches!(err, AuditError::DocumentNotFound(_)));
        }
    }

    #[tokio::test]
    async fn test_list_documents_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.html"), "").unwrap();
        std::fs::write(dir.path().join("a.html"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let store = FsStore::new(dir.path()).unwrap();
        let ids = store.list_documents().await.unwrap();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
