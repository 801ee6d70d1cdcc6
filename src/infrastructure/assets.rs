//! Department picture lookup.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

/// Resolves and decodes `img/<lowercased name>.png` under an assets root.
#[derive(Debug, Clone)]
pub struct DepartmentImageLoader {
    root: PathBuf,
}

impl DepartmentImageLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Relative asset reference for a department image key.
    #[must_use]
    pub fn relative_path(image_key: &str) -> String {
        format!("img/{image_key}.png")
    }

    /// Absolute path for a department image key.
    #[must_use]
    pub fn path_for(&self, image_key: &str) -> PathBuf {
        self.root.join(Self::relative_path(image_key))
    }

    /// Decodes the picture. Missing or unreadable files yield `None`; the
    /// caller simply shows no image.
    pub async fn load(&self, image_key: &str) -> Option<Arc<image::DynamicImage>> {
        let path = self.path_for(image_key);
        let result = tokio::task::spawn_blocking(move || {
            let decoded = image::open(&path);
            (path, decoded)
        })
        .await;

        match result {
            Ok((_, Ok(image))) => Some(Arc::new(image)),
            Ok((path, Err(e))) => {
                debug!(path = %path.display(), error = %e, "Department image unavailable");
                None
            }
            Err(e) => {
                debug!(error = %e, "Image decode task failed");
                None
            }
        }
    }
}
