//! Store Module
//!
//! Path-addressed operations over a nested root mapping.
//!
//! ## Responsibilities
//! - Resolve a `PathKey` against nested mappings (and lists, by index)
//! - Create intermediate mappings when setting deep paths
//! - Remove a single key without pruning its ancestors
//! - Count the entries of a root or nested container
//!
//! ## Containers
//! ```text
//! Map { "one": Object { "two": Array [ "a", "b" ] } }
//!          │               │            │
//!        "one"           "two"         "1"      => one.two.1 == "b"
//! ```
//! Lists are addressed by canonical index (`"0"`, `"1"`, never `"01"`).
//! A list that has to hold a non-index key, or that loses an element
//! from its middle, is re-keyed into a mapping so the surviving
//! elements keep their addresses.
//!
//! All functions take the root by reference; the caller owns it and is
//! responsible for holding whatever lock protects it for the whole call.

mod list;
mod nested;

pub use nested::{count_at, get_at, has_at, remove_at, resolve, set_at};

pub(crate) use list::{index_map, list_index};
