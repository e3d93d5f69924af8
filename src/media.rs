use std::path::PathBuf;

/// Maps public media URLs back to files under the media root so admin
/// deletes can clean up uploaded logos. Everything here is best-effort;
/// callers treat a failed cleanup as a warning, never an error.
#[derive(Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base: String,
}

impl MediaStore {
    pub fn new(root: PathBuf, public_url: String) -> Self {
        let public_base = format!("{}/media/", public_url.trim_end_matches('/'));
        Self { root, public_base }
    }

    /// Resolves a public URL to its file below the media root. URLs hosted
    /// elsewhere or escaping the root resolve to nothing.
    fn local_path(&self, url: &str) -> Option<PathBuf> {
        let rel = url.strip_prefix(&self.public_base)?;
        let rel = rel.split('?').next().unwrap_or(rel);
        if rel.is_empty() || rel.split('/').any(|seg| seg.is_empty() || seg == "..") {
            return None;
        }
        Some(self.root.join(rel))
    }

    pub async fn delete_by_url(&self, url: &str) -> bool {
        let Some(path) = self.local_path(url) else {
            tracing::warn!(%url, "Media URL is not managed by this deployment, skipping delete");
            return false;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Media asset removed");
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to remove media asset");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaStore {
        MediaStore::new(PathBuf::from("/srv/media"), "https://example.org".to_string())
    }

    #[test]
    fn managed_url_resolves_below_root() {
        let path = media().local_path("https://example.org/media/logos/hotel.png");
        assert_eq!(path, Some(PathBuf::from("/srv/media/logos/hotel.png")));
    }

    #[test]
    fn foreign_and_escaping_urls_resolve_to_nothing() {
        let m = media();
        assert_eq!(m.local_path("https://cdn.other.org/media/logos/hotel.png"), None);
        assert_eq!(m.local_path("https://example.org/media/../secrets.txt"), None);
        assert_eq!(m.local_path("https://example.org/media/"), None);
    }

    #[test]
    fn query_string_is_ignored() {
        let path = media().local_path("https://example.org/media/logos/hotel.png?v=2");
        assert_eq!(path, Some(PathBuf::from("/srv/media/logos/hotel.png")));
    }

    #[tokio::test]
    async fn deleting_a_missing_file_reports_failure() {
        let m = MediaStore::new(
            std::env::temp_dir().join("bureau-media-tests"),
            "https://example.org".to_string(),
        );
        assert!(!m.delete_by_url("https://example.org/media/nope.png").await);
    }
}
