//! Template Loader
//!
//! Loads template text from the templates directory or falls back to the
//! embedded defaults.

use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use super::embedded;
use super::kind::TemplateKind;

/// Resolves template text for a kind
///
/// Resolution never fails: a missing or unreadable file degrades to the
/// built-in default for that kind. Files are re-read on every call, so an
/// edit on disk takes effect immediately.
pub struct TemplateLoader {
    /// Directory searched for user template files
    search_dir: Option<PathBuf>,
    /// Source of built-in defaults, swappable in tests
    fallback: fn(TemplateKind) -> &'static str,
}

impl TemplateLoader {
    /// Create a loader over the given templates directory
    pub fn new(search_dir: impl AsRef<Path>) -> Self {
        Self {
            search_dir: Some(search_dir.as_ref().to_path_buf()),
            fallback: embedded::get,
        }
    }

    /// Create a loader that only uses embedded templates (for testing)
    pub fn embedded_only() -> Self {
        Self {
            search_dir: None,
            fallback: embedded::get,
        }
    }

    /// Replace the source of built-in defaults
    pub fn with_fallback(mut self, fallback: fn(TemplateKind) -> &'static str) -> Self {
        self.fallback = fallback;
        self
    }

    /// Resolve the template text for a kind
    ///
    /// Checks `search_dir/<kind file name>` first; if the file is absent or
    /// cannot be read, returns the built-in default instead.
    pub fn resolve(&self, kind: TemplateKind) -> String {
        if let Some(ref dir) = self.search_dir {
            let path = dir.join(kind.file_name());
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(content) => {
                        debug!("Loaded template for {} from {}", kind, path.display());
                        return content;
                    }
                    Err(e) => {
                        error!(
                            "Failed to read template {}: {}, using built-in default",
                            path.display(),
                            e
                        );
                        return (self.fallback)(kind).to_string();
                    }
                }
            }
            warn!("Template file not found: {}, using built-in default", path.display());
        } else {
            debug!("No templates directory configured, using built-in default for {}", kind);
        }

        (self.fallback)(kind).to_string()
    }
}
