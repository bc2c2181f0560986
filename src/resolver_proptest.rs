//! Property-based tests for group resolution.
//!
//! The resolver must terminate and return a finite, duplicate-free list for
//! arbitrary catalogs, including ones where groups reference each other
//! cyclically.

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

use crate::document::Item;
use crate::resolver::resolve_groups;

fn item(name: &str, modes: Option<Vec<String>>) -> Item {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::String("name".to_string()),
        Value::String(name.to_string()),
    );
    if let Some(members) = modes {
        mapping.insert(
            Value::String("modes".to_string()),
            Value::Sequence(members.into_iter().map(Value::String).collect()),
        );
    }
    Item::new(mapping)
}

/// A small closed universe of names so that cross-references and cycles
/// are actually generated.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "d".to_string(),
        "e".to_string(),
    ])
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        (
            name_strategy(),
            prop::option::of(prop::collection::vec(name_strategy(), 0..4)),
        ),
        0..6,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, modes)| item(&name, modes))
            .collect()
    })
}

proptest! {
    #[test]
    fn resolve_terminates_and_deduplicates(
        catalog in catalog_strategy(),
        requested in prop::collection::vec(name_strategy(), 0..6),
    ) {
        let resolution = resolve_groups(&catalog, &requested);

        // Every resolved name appears exactly once.
        for (i, name) in resolution.names.iter().enumerate() {
            prop_assert!(!resolution.names[i + 1..].contains(name));
        }

        // Resolved names are drawn from the request or from some group's
        // modes; either way they stay inside the closed name universe.
        for name in &resolution.names {
            prop_assert!(["a", "b", "c", "d", "e"].contains(&name.as_str()));
        }
    }

    #[test]
    fn resolved_names_are_never_groups(
        catalog in catalog_strategy(),
        requested in prop::collection::vec(name_strategy(), 0..6),
    ) {
        let resolution = resolve_groups(&catalog, &requested);
        for name in &resolution.names {
            if let Some(found) = crate::document::find_by_name(&catalog, name) {
                prop_assert!(!found.is_group(), "group {} leaked into result", name);
            }
        }
    }
}
