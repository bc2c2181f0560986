//! # Modeset Library
//!
//! This library provides the core functionality for reconciling two
//! YAML-encoded collections of named configuration items: a read-only
//! **main document** (the catalog) and a mutable **active document** (the
//! selection). It is designed to be used by the `modeset` command-line
//! tool but can also be integrated into other applications.
//!
//! ## Quick Example
//!
//! ```
//! use modeset::document::normalize;
//! use modeset::ops::resolve_groups;
//!
//! let catalog = normalize(serde_yaml::from_str(
//!     "- name: review\n  modes: [architect, critic]\n- name: architect\n- name: critic",
//! ).unwrap());
//!
//! let resolution = resolve_groups(&catalog, &["review".to_string()]);
//! assert_eq!(resolution.names, vec!["architect", "critic"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Document model (`document`)**: items are opaque YAML mappings keyed
//!   by a `name` field; persisted documents are normalized from either a
//!   bare sequence or the wrapped `customModes:` container form.
//! - **Group resolution (`resolver`)**: items carrying a `modes` field are
//!   aliases that expand, recursively and cycle-safely, into other item
//!   names.
//! - **Reconciliation (`reconcile`)**: pure add/remove transforms with
//!   duplicate/missing diagnostics reported alongside success.
//! - **Persistence (`store`, `ops`)**: one load per document, one write
//!   per operation; the selection is always written in the wrapped form.
//! - **Validation (`validation`)**: strict pre-flight checks for name
//!   lists, document structure and group definitions.
//!
//! The engine takes explicit paths everywhere; defaulting from persisted
//! settings (`settings`) is the CLI's job.

pub mod document;
pub mod error;
pub mod ops;
pub mod output;
pub mod reconcile;
pub mod resolver;
pub mod settings;
pub mod store;
pub mod suggestions;
pub mod validation;

#[cfg(test)]
mod resolver_proptest;
