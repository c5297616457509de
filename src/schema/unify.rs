//! Schema unification
//!
//! Summarizes the fragments inferred for the items of one array into a single
//! item fragment. This is deliberately not a full lattice join:
//!
//! - fragments sharing one non-object type collapse to the first of them,
//!   so e.g. differing `items` of nested arrays are not merged;
//! - object properties merge last-write-wins, and `required` lists every key
//!   seen in at least one item;
//! - mixed types become an `anyOf` of every input, duplicates included.

use super::types::{JsonType, SchemaFragment};
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

/// Unify sibling fragments into one.
///
/// An empty input yields the unconstrained fragment `{}`.
pub fn unify(fragments: Vec<SchemaFragment>) -> SchemaFragment {
    let mut tags: Vec<Option<JsonType>> = Vec::new();
    for fragment in &fragments {
        if !tags.contains(&fragment.json_type) {
            tags.push(fragment.json_type);
        }
    }

    match tags.as_slice() {
        [] => SchemaFragment::any(),
        [Some(JsonType::Object)] => merge_objects(&fragments),
        [_] => fragments.into_iter().next().unwrap_or_default(),
        _ => {
            trace!(
                count = fragments.len(),
                distinct = tags.len(),
                "item types disagree, emitting anyOf"
            );
            SchemaFragment::any_of(fragments)
        }
    }
}

/// Union of properties and required keys across object fragments
fn merge_objects(fragments: &[SchemaFragment]) -> SchemaFragment {
    let mut properties: Option<IndexMap<String, SchemaFragment>> = None;
    let mut required: Option<IndexSet<String>> = None;

    for fragment in fragments {
        if let Some(props) = &fragment.properties {
            let merged = properties.get_or_insert_with(IndexMap::new);
            for (key, prop) in props {
                // Overwriting keeps the key's first-seen position.
                merged.insert(key.clone(), prop.clone());
            }
        }
        if let Some(keys) = &fragment.required {
            required
                .get_or_insert_with(IndexSet::new)
                .extend(keys.iter().cloned());
        }
    }

    SchemaFragment {
        properties,
        required: required.map(|keys| keys.into_iter().collect()),
        ..SchemaFragment::new(JsonType::Object)
    }
}
