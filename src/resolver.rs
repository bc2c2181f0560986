//! # Group Resolution
//!
//! Expands a list of requested names against a catalog, replacing group
//! names with their constituent concrete names, recursively.
//!
//! Cycle safety comes from a "visiting" set of group names on the current
//! expansion path. The set is copied per branch rather than shared, so two
//! independent groups referencing a common sub-group are not falsely
//! flagged as cyclic; only a true ancestor repeating on its own descent
//! path triggers the diagnostic. A cycle drops the offending name from the
//! expansion and is reported as a warning, never a hard failure.
//!
//! Names with no catalog entry pass through unchanged so the reconciler
//! can report them as missing separately.

use std::collections::BTreeSet;

use log::warn;
use serde_yaml::Value;

use crate::document::{find_by_name, parse_modes, Item};

/// Outcome of a group resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// Deduplicated concrete names, in first-seen order.
    pub names: Vec<String>,
    /// Group names skipped because they repeated on their own expansion path.
    pub cycles: Vec<String>,
}

/// Resolve group references into a flat, deduplicated list of concrete names.
///
/// Each resolved name appears exactly once; callers must not depend on any
/// ordering beyond that.
pub fn resolve_groups(catalog: &[Item], requested: &[String]) -> Resolution {
    let mut resolution = Resolution::default();
    let visiting = BTreeSet::new();
    resolve_into(catalog, requested, &visiting, &mut resolution);
    resolution
}

fn resolve_into(
    catalog: &[Item],
    requested: &[String],
    visiting: &BTreeSet<String>,
    resolution: &mut Resolution,
) {
    for name in requested {
        if visiting.contains(name) {
            warn!("Circular reference detected in group: {}", name);
            push_unique(&mut resolution.cycles, name);
            continue;
        }

        match find_by_name(catalog, name) {
            // Unknown names are concrete leaves; the reconciler reports them.
            None => push_unique(&mut resolution.names, name),
            Some(item) if item.is_group() => {
                let members = parse_modes(item.modes().unwrap_or(&Value::Null));
                let mut branch = visiting.clone();
                branch.insert(name.clone());
                resolve_into(catalog, &members, &branch, resolution);
            }
            Some(_) => push_unique(&mut resolution.names, name),
        }
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_string());
    }
}
