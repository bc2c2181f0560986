//! # Input Validation
//!
//! Pre-flight checks that reject malformed name lists and malformed
//! documents before they reach the resolver or reconciler.
//!
//! [`validate_group`] is a stricter gate than resolution itself: where the
//! resolver silently skips a cyclic reference, validation rejects it with
//! `InvalidInput`. It can be run independently when a caller wants a
//! document vetted up front.

use std::collections::BTreeSet;

use serde_yaml::Value;

use crate::document::{find_by_name, parse_modes, Item};
use crate::error::{Error, Result};

/// Validate a list of requested names: non-empty, every entry non-empty.
pub fn validate_names(names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(Error::invalid_input("At least one name is required"));
    }
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(Error::invalid_input("All names must be non-empty strings"));
    }
    Ok(())
}

/// Validate a raw document value: must be a sequence of mappings, each with
/// an identity key, and every group it contains must pass [`validate_group`].
pub fn validate_document_structure(value: &Value) -> Result<()> {
    let sequence = match value {
        Value::Sequence(seq) => seq,
        _ => return Err(Error::invalid_input("Document must be a sequence")),
    };

    let mut document = Vec::with_capacity(sequence.len());
    for element in sequence {
        match element {
            Value::Mapping(map) => {
                let item = Item::new(map.clone());
                if item.name().is_none() {
                    return Err(Error::invalid_input(
                        "All document items must have a name property",
                    ));
                }
                document.push(item);
            }
            _ => {
                return Err(Error::invalid_input(
                    "All document items must be mappings with a name property",
                ))
            }
        }
    }

    for item in document.iter().filter(|item| item.modes().is_some()) {
        validate_group(item, &document, &BTreeSet::new())?;
    }

    Ok(())
}

/// Validate a single group: it must carry a parsable, non-empty `modes`
/// field, and its expansion must not revisit a group already on the
/// current path.
pub fn validate_group(group: &Item, catalog: &[Item], visiting: &BTreeSet<String>) -> Result<()> {
    let name = group
        .name()
        .ok_or_else(|| Error::invalid_input("Group must have a valid name property"))?;

    let modes = match group.modes() {
        Some(modes @ (Value::String(_) | Value::Sequence(_))) => modes,
        Some(Value::Null) | None => {
            return Err(Error::invalid_input(format!(
                "Group '{}' must have a modes property",
                name
            )))
        }
        Some(_) => {
            return Err(Error::invalid_input(format!(
                "Group '{}' modes property must be a string or a sequence",
                name
            )))
        }
    };

    let members = parse_modes(modes);
    if members.is_empty() {
        return Err(Error::invalid_input(format!(
            "Group '{}' must have at least one mode",
            name
        )));
    }

    if visiting.contains(name) {
        return Err(Error::invalid_input(format!(
            "Circular reference detected in group: {}",
            name
        )));
    }

    let mut branch = visiting.clone();
    branch.insert(name.to_string());

    for member in &members {
        // Unknown members are fine here; the reconciler reports them later.
        if let Some(item) = find_by_name(catalog, member) {
            if item.modes().is_some() {
                validate_group(item, catalog, &branch)?;
            }
        }
    }

    Ok(())
}
