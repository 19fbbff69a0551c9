use std::collections::BTreeSet;

use crate::report::index::GROUP_MARKER;
use crate::table::Table;

/// The distinguished group every other group falls back to.
pub const DEFAULT_GROUP: &str = "Default";

/// Distinct group names from group-scoped rows, sorted ascending with
/// "Default" pinned first when present. Empty names are dropped. An empty
/// result is normal, not an error.
pub fn extract_groups(table: &Table) -> Vec<String> {
    let names: BTreeSet<&str> = table
        .records
        .iter()
        .filter(|r| r.key(1) == GROUP_MARKER)
        .map(|r| r.key(2))
        .filter(|name| !name.is_empty())
        .collect();

    let mut groups: Vec<String> = names.into_iter().map(str::to_string).collect();
    if let Some(pos) = groups.iter().position(|g| g == DEFAULT_GROUP) {
        let default = groups.remove(pos);
        groups.insert(0, default);
    }
    groups
}
