//! # Operation Surface
//!
//! Path-level entry points tying the pieces together: load the documents,
//! run the pure reconcile transform, persist the result. Each operation
//! performs at most one load of the catalog, one load of the selection and
//! one write of the selection; the in-memory result is fully computed
//! before the single write, so a failure never leaves a partially written
//! selection behind.
//!
//! Callers must pass explicit, already-resolved paths. Defaulting from
//! persisted settings happens at the CLI boundary (see
//! [`crate::commands`]), never here.

use std::path::Path;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::reconcile;
use crate::store::DocumentStore;

pub use crate::resolver::{resolve_groups, Resolution};

/// What a persisted operation did, plus the diagnostics it gathered.
#[derive(Debug, Clone)]
pub struct Report {
    /// The selection as persisted.
    pub document: Document,
    /// Names added or removed by the operation.
    pub changed: Vec<String>,
    /// Human-readable diagnostics that accompany a successful outcome.
    pub warnings: Vec<String>,
}

/// Copy catalog items (expanding groups) into the selection and persist it.
pub fn add(names: &[String], catalog_path: &Path, selection_path: &Path) -> Result<Report> {
    let store = DocumentStore::new(selection_path);

    let catalog = store.load(catalog_path).ok_or_else(|| Error::NotFound {
        path: catalog_path.display().to_string(),
    })?;
    // A missing selection starts out empty.
    let selection = store.load(selection_path).unwrap_or_default();

    let outcome = reconcile::add(&catalog, &selection, names)?;

    let mut warnings = Vec::new();
    push_warning(&mut warnings, "Circular group reference", &outcome.cycles);
    push_warning(
        &mut warnings,
        "Some modes not found in the main document",
        &outcome.missing,
    );
    push_warning(
        &mut warnings,
        "Already in the active document, skipped",
        &outcome.duplicates,
    );

    store.save(selection_path, &outcome.document)?;

    Ok(Report {
        document: outcome.document,
        changed: outcome.added,
        warnings,
    })
}

/// Remove items (expanding groups) from the selection and persist it.
///
/// When `catalog_path` is absent, groups are expanded against the
/// selection itself.
pub fn remove(
    names: &[String],
    catalog_path: Option<&Path>,
    selection_path: &Path,
) -> Result<Report> {
    let store = DocumentStore::new(selection_path);

    let catalog = match catalog_path {
        Some(path) => Some(store.load(path).ok_or_else(|| Error::NotFound {
            path: path.display().to_string(),
        })?),
        None => None,
    };
    let selection = store.load(selection_path).ok_or_else(|| Error::NotFound {
        path: selection_path.display().to_string(),
    })?;

    let outcome = reconcile::remove(catalog.as_deref(), &selection, names)?;

    let mut warnings = Vec::new();
    push_warning(&mut warnings, "Circular group reference", &outcome.cycles);
    push_warning(
        &mut warnings,
        "Not found in the active document",
        &outcome.not_found,
    );

    store.save(selection_path, &outcome.document)?;

    Ok(Report {
        document: outcome.document,
        changed: outcome.removed,
        warnings,
    })
}

/// Persist an empty selection, regardless of its current content.
pub fn remove_all(selection_path: &Path) -> Result<Report> {
    let store = DocumentStore::new(selection_path);
    store.save(selection_path, &[])?;
    Ok(Report {
        document: Vec::new(),
        changed: Vec::new(),
        warnings: Vec::new(),
    })
}

fn push_warning(warnings: &mut Vec<String>, label: &str, names: &[String]) {
    if !names.is_empty() {
        warnings.push(format!("{}: {}", label, names.join(", ")));
    }
}
