//! # Set Reconciliation
//!
//! Pure add/remove transforms between a catalog and a selection. Each
//! transform validates its inputs, resolves group references, and computes
//! the new selection without touching the filesystem; persistence is the
//! caller's job (see [`crate::ops`]).
//!
//! Partial matches are not failures: missing names, already-present
//! duplicates and cycle skips are reported on the outcome so callers can
//! surface them as warnings. Only an empty residue fails, with `NoMatch`
//! or `NothingToDo`.

use crate::document::{contains_name, Document, Item};
use crate::error::{Error, Result};
use crate::resolver::resolve_groups;
use crate::validation::validate_names;

/// Result of a successful add transform.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    /// The new selection: existing items followed by the appended ones.
    pub document: Document,
    /// Names of the items appended, in catalog order.
    pub added: Vec<String>,
    /// Names already present in the selection and therefore skipped.
    pub duplicates: Vec<String>,
    /// Resolved names with no catalog entry.
    pub missing: Vec<String>,
    /// Group names skipped during resolution because of a cycle.
    pub cycles: Vec<String>,
}

/// Result of a successful remove transform.
#[derive(Debug, Clone)]
pub struct RemoveOutcome {
    /// The new selection, relative order of survivors preserved.
    pub document: Document,
    /// Names of the items removed.
    pub removed: Vec<String>,
    /// Resolved names that were not present in the selection.
    pub not_found: Vec<String>,
    /// Group names skipped during resolution because of a cycle.
    pub cycles: Vec<String>,
}

/// Compute the selection that results from adding `requested` (groups
/// expanded against `catalog`) to `selection`.
///
/// Fails with `NoMatch` when nothing resolves to a catalog entry and with
/// `NothingToDo` when every match is already present.
pub fn add(catalog: &[Item], selection: &[Item], requested: &[String]) -> Result<AddOutcome> {
    validate_names(requested)?;

    let resolution = resolve_groups(catalog, requested);

    // Catalog order, not request order.
    let found: Vec<&Item> = catalog
        .iter()
        .filter(|item| {
            item.name()
                .is_some_and(|name| resolution.names.iter().any(|n| n == name))
        })
        .collect();

    if found.is_empty() {
        return Err(Error::NoMatch {
            message: "no matching modes found in the main document".to_string(),
        });
    }

    let missing: Vec<String> = resolution
        .names
        .iter()
        .filter(|name| !found.iter().any(|item| item.name() == Some(name.as_str())))
        .cloned()
        .collect();

    let mut added = Vec::new();
    let mut duplicates = Vec::new();
    let mut appended: Vec<Item> = Vec::new();
    for item in found {
        let name = item.name().unwrap_or_default().to_string();
        if contains_name(selection, &name) {
            duplicates.push(name);
        } else {
            added.push(name);
            appended.push(item.clone());
        }
    }

    if appended.is_empty() {
        return Err(Error::NothingToDo {
            message: "all matching modes are already in the active document".to_string(),
        });
    }

    let mut document = selection.to_vec();
    document.extend(appended);

    Ok(AddOutcome {
        document,
        added,
        duplicates,
        missing,
        cycles: resolution.cycles,
    })
}

/// Compute the selection that results from removing `requested` from
/// `selection`.
///
/// Group expansion uses `catalog` when one is supplied; otherwise the
/// selection itself serves as the lookup source, so a group physically
/// present in the selection can still be expanded.
///
/// Fails with `NoMatch` when none of the resolved names are present.
pub fn remove(
    catalog: Option<&[Item]>,
    selection: &[Item],
    requested: &[String],
) -> Result<RemoveOutcome> {
    validate_names(requested)?;

    let lookup = catalog.unwrap_or(selection);
    let resolution = resolve_groups(lookup, requested);

    let mut removed = Vec::new();
    let mut not_found = Vec::new();
    for name in &resolution.names {
        if contains_name(selection, name) {
            removed.push(name.clone());
        } else {
            not_found.push(name.clone());
        }
    }

    if removed.is_empty() {
        return Err(Error::NoMatch {
            message: "none of the specified modes exist in the active document".to_string(),
        });
    }

    let document: Document = selection
        .iter()
        .filter(|item| {
            !item
                .name()
                .is_some_and(|name| removed.iter().any(|r| r == name))
        })
        .cloned()
        .collect();

    Ok(RemoveOutcome {
        document,
        removed,
        not_found,
        cycles: resolution.cycles,
    })
}
