use serde::Serialize;
use tracing::debug;

use crate::report::index::RegistryIndex;
use crate::table::Table;

/// Dense module-by-group presence grid. Every (module, group) pair in the
/// derived sets carries an explicit boolean; consumers never see an absent
/// cell.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionMatrix {
    /// Row labels: deduplicated module names in first-seen source order.
    pub modules: Vec<String>,
    /// Column labels, in the order supplied by the caller.
    pub groups: Vec<String>,
    /// cells[m][g] is true iff an explicit grant row exists for
    /// (modules[m], groups[g]).
    pub cells: Vec<Vec<bool>>,
}

impl PermissionMatrix {
    /// Presence for a (module, group) pair, None if either label is unknown.
    pub fn granted(&self, module: &str, group: &str) -> Option<bool> {
        let m = self.modules.iter().position(|x| x == module)?;
        let g = self.groups.iter().position(|x| x == group)?;
        Some(self.cells[m][g])
    }
}

/// Build the dense presence matrix for every discovered module against the
/// supplied groups. Presence means at least one row with key1=="Group",
/// key2==group, key3=="Table", key4==module. Zero modules or zero groups
/// yields an empty grid.
pub fn build_permission_matrix(table: &Table, groups: &[String]) -> PermissionMatrix {
    let index = RegistryIndex::build(table);
    let modules = index.modules().to_vec();
    let cells: Vec<Vec<bool>> = modules
        .iter()
        .map(|module| groups.iter().map(|g| index.has_grant(g, module)).collect())
        .collect();
    debug!(
        modules = modules.len(),
        groups = groups.len(),
        "permission matrix built"
    );
    PermissionMatrix {
        modules,
        groups: groups.to_vec(),
        cells,
    }
}
