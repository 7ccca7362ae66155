// Screenshot capture
//
// Files land under the reports root as <name>_<timestamp>.png so reruns
// never clobber earlier captures.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thirtyfour::{WebDriver, WebElement};
use tracing::info;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Screenshots {
    root: PathBuf,
}

impl Screenshots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn target_path(&self, name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        Ok(self.root.join(format!("{}_{}.png", name, timestamp)))
    }

    /// Captures the full viewport.
    pub async fn capture(&self, driver: &WebDriver, name: &str) -> Result<PathBuf> {
        let path = self.target_path(name)?;
        driver.screenshot(&path).await?;
        info!(path = %path.display(), "screenshot captured");
        Ok(path)
    }

    /// Captures a single element.
    pub async fn capture_element(&self, element: &WebElement, name: &str) -> Result<PathBuf> {
        let path = self.target_path(name)?;
        element.screenshot(&path).await?;
        info!(path = %path.display(), "element screenshot captured");
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_shape() {
        let dir = std::env::temp_dir().join("storefront-e2e-shots");
        let shots = Screenshots::new(&dir);
        let path = shots.target_path("login_failure").unwrap();
        let file = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file.starts_with("login_failure_"));
        assert!(file.ends_with(".png"));
        assert!(dir.is_dir());
        let _ = fs::remove_dir_all(&dir);
    }
}
