use std::collections::{HashMap, HashSet};

use crate::table::Table;

/// key1 value marking a row as group-scoped.
pub const GROUP_MARKER: &str = "Group";
/// key3 value marking a module-presence row (module name in key4).
pub const TABLE_MARKER: &str = "Table";
/// key3 value marking a module-grant row (module list in `value`).
pub const ACCESS_MARKER: &str = "Table Access";

/// Single-pass index over a loaded registry. Replaces repeated linear scans
/// with lookups keyed by the (key1, key2, key3, key4) row shape; built once
/// per derivation and discarded with it.
#[derive(Debug, Default)]
pub struct RegistryIndex {
    /// group -> modules with an explicit "Table" row for that group.
    grants: HashMap<String, HashSet<String>>,
    /// key4 of every "Table" row, deduplicated, first-seen source order.
    modules: Vec<String>,
    /// Raw `value` payloads of "Table Access" rows, per group, source order.
    access_values: HashMap<String, Vec<String>>,
}

impl RegistryIndex {
    pub fn build(table: &Table) -> Self {
        let mut idx = RegistryIndex::default();
        let mut seen = HashSet::new();
        for rec in &table.records {
            if rec.key(3) == TABLE_MARKER && seen.insert(rec.key(4).to_string()) {
                idx.modules.push(rec.key(4).to_string());
            }
            if rec.key(1) != GROUP_MARKER {
                continue;
            }
            match rec.key(3) {
                TABLE_MARKER => {
                    idx.grants
                        .entry(rec.key(2).to_string())
                        .or_default()
                        .insert(rec.key(4).to_string());
                }
                ACCESS_MARKER => {
                    idx.access_values
                        .entry(rec.key(2).to_string())
                        .or_default()
                        .push(rec.value.clone());
                }
                _ => {}
            }
        }
        idx
    }

    /// Module row labels in first-seen source order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// True iff an explicit "Table" row pairs this group with this module.
    pub fn has_grant(&self, group: &str, module: &str) -> bool {
        self.grants.get(group).is_some_and(|m| m.contains(module))
    }

    /// Raw access payloads recorded for a group, empty if none.
    pub fn access_values(&self, group: &str) -> &[String] {
        self.access_values
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
