//! # Document Store
//!
//! Loads YAML documents from disk and persists them back, applying the
//! wrapped-vs-bare shape rule on write.
//!
//! Reads are forgiving: a missing file or a parse error is logged and
//! reported as an absent document rather than an error, so the caller
//! decides whether absence matters (a missing catalog fails an add; a
//! missing selection just starts empty).
//!
//! Writes are strict about shape. The path configured as the *selection*
//! always gets the wrapped form: `customModes: []` when empty, the
//! container key followed by the serialized items otherwise. Any other
//! path gets the bare sequence. Paths are compared after resolving to an
//! absolute form so relative and absolute spellings of the same file
//! agree.
//!
//! `serde_yaml` gives the remaining serialization guarantees for free: no
//! line wrapping, no anchors or aliases for repeated values, and per-item
//! field order preserved by its insertion-ordered `Mapping`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, warn};
use serde_yaml::{Mapping, Value};

use crate::document::{normalize, to_values, Document, Item, CONTAINER_FIELD};
use crate::error::Result;

/// Loads and persists documents, keyed on the configured selection path
/// for the write-shape decision.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    selection_path: PathBuf,
}

impl DocumentStore {
    pub fn new(selection_path: &Path) -> Self {
        Self {
            selection_path: absolute(selection_path),
        }
    }

    /// Load and normalize the document at `path`.
    ///
    /// Returns `None` when the file is missing or fails to parse; both
    /// cases are logged, never raised.
    pub fn load(&self, path: &Path) -> Option<Document> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_yaml::from_str::<Value>(&text) {
            Ok(value) => Some(normalize(value)),
            Err(e) => {
                error!("Error parsing YAML file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Persist `document` at `path`, creating parent directories as needed.
    ///
    /// The configured selection path is written in the wrapped container
    /// form; every other path is written bare.
    pub fn save(&self, path: &Path, document: &[Item]) -> Result<()> {
        let value = if self.is_selection_path(path) {
            let mut container = Mapping::new();
            container.insert(
                Value::String(CONTAINER_FIELD.to_string()),
                Value::Sequence(to_values(document)),
            );
            Value::Mapping(container)
        } else {
            Value::Sequence(to_values(document))
        };

        let text = serde_yaml::to_string(&value)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, text)?;
        Ok(())
    }

    fn is_selection_path(&self, path: &Path) -> bool {
        absolute(path) == self.selection_path
    }
}

/// Resolve a path to an absolute form without requiring it to exist.
///
/// Prefers `canonicalize` (which also resolves symlinks) and falls back to
/// joining onto the current directory for not-yet-created files.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::normalize;
    use tempfile::TempDir;

    fn document(yaml: &str) -> Document {
        normalize(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = DocumentStore::new(&temp.path().join("active.yaml"));
        assert!(store.load(&temp.path().join("nope.yaml")).is_none());
    }

    #[test]
    fn test_load_parse_error_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        fs::write(&path, "foo: [unclosed").unwrap();
        let store = DocumentStore::new(&temp.path().join("active.yaml"));
        assert!(store.load(&path).is_none());
    }

    #[test]
    fn test_load_wrapped_and_bare_agree() {
        let temp = TempDir::new().unwrap();
        let bare = temp.path().join("bare.yaml");
        let wrapped = temp.path().join("wrapped.yaml");
        fs::write(&bare, "- name: x\n").unwrap();
        fs::write(&wrapped, "customModes:\n- name: x\n").unwrap();

        let store = DocumentStore::new(&temp.path().join("active.yaml"));
        assert_eq!(store.load(&bare).unwrap(), store.load(&wrapped).unwrap());
    }

    #[test]
    fn test_save_selection_is_wrapped() {
        let temp = TempDir::new().unwrap();
        let active = temp.path().join("active.yaml");
        let store = DocumentStore::new(&active);

        store.save(&active, &document("- name: x")).unwrap();
        let text = fs::read_to_string(&active).unwrap();
        assert!(text.starts_with("customModes:"));
        assert!(text.contains("name: x"));
    }

    #[test]
    fn test_save_empty_selection_is_explicit_empty_container() {
        let temp = TempDir::new().unwrap();
        let active = temp.path().join("active.yaml");
        let store = DocumentStore::new(&active);

        store.save(&active, &[]).unwrap();
        let text = fs::read_to_string(&active).unwrap();
        assert!(text.contains("customModes: []"));

        // Re-loads back to an empty document.
        assert!(store.load(&active).unwrap().is_empty());
    }

    #[test]
    fn test_save_other_path_is_bare() {
        let temp = TempDir::new().unwrap();
        let store = DocumentStore::new(&temp.path().join("active.yaml"));
        let catalog = temp.path().join("main.yaml");

        store.save(&catalog, &document("- name: x")).unwrap();
        let text = fs::read_to_string(&catalog).unwrap();
        assert!(!text.contains("customModes"));
        assert!(text.contains("name: x"));
    }

    #[test]
    fn test_selection_path_comparison_is_absolute() {
        let temp = TempDir::new().unwrap();
        let active = temp.path().join("active.yaml");
        fs::write(&active, "customModes: []\n").unwrap();

        // Configure with an unnormalized spelling of the same file.
        let dotted = temp.path().join(".").join("active.yaml");
        let store = DocumentStore::new(&dotted);
        store.save(&active, &document("- name: x")).unwrap();
        let text = fs::read_to_string(&active).unwrap();
        assert!(text.starts_with("customModes:"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("deep/dir/active.yaml");
        let store = DocumentStore::new(&nested);
        store.save(&nested, &[]).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_round_trip_preserves_field_order() {
        let temp = TempDir::new().unwrap();
        let active = temp.path().join("active.yaml");
        let store = DocumentStore::new(&active);

        let doc = document("- name: x\n  zeta: 1\n  alpha: 2");
        store.save(&active, &doc).unwrap();
        let text = fs::read_to_string(&active).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
    }
}
