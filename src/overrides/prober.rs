//! Filesystem probing for override files.

use std::io;
use std::path::Path;

/// Answers whether a view file exists regardless of its extension.
pub trait FileProber: Send + Sync {
    /// True if at least one entry matches `<directory>/<prefix>.*`.
    ///
    /// `prefix` may contain `/`-separated subdirectories.
    fn exists_with_any_extension(&self, directory: &Path, prefix: &str) -> io::Result<bool>;
}

/// Prober backed by the local filesystem, using glob matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobProber;

impl GlobProber {
    pub fn new() -> Self {
        Self
    }
}

impl FileProber for GlobProber {
    fn exists_with_any_extension(&self, directory: &Path, prefix: &str) -> io::Result<bool> {
        let base = directory.join(prefix);
        let pattern = format!("{}.*", glob::Pattern::escape(&base.to_string_lossy()));

        let mut matches = glob::glob(&pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        // Unreadable entries are treated as absent.
        Ok(matches.any(|entry| entry.is_ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_file_with_any_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("products")).unwrap();
        fs::write(temp.path().join("products/show.html.erb"), "").unwrap();

        let prober = GlobProber::new();
        assert!(prober
            .exists_with_any_extension(temp.path(), "products/show")
            .unwrap());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let prober = GlobProber::new();
        assert!(!prober
            .exists_with_any_extension(temp.path(), "products/show")
            .unwrap());
    }

    #[test]
    fn missing_directory_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let prober = GlobProber::new();
        assert!(!prober
            .exists_with_any_extension(&temp.path().join("nope"), "_navigation_element")
            .unwrap());
    }

    #[test]
    fn requires_extension_separator() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("show_all.html"), "").unwrap();
        fs::write(temp.path().join("show"), "").unwrap();

        let prober = GlobProber::new();
        assert!(!prober.exists_with_any_extension(temp.path(), "show").unwrap());
    }

    #[test]
    fn glob_characters_in_directory_are_literal() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("site[1]");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("_poll.liquid"), "").unwrap();

        let prober = GlobProber::new();
        assert!(prober.exists_with_any_extension(&dir, "_poll").unwrap());
    }
}
