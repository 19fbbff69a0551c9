pub mod explain;
pub mod groups;
pub mod index;
pub mod matrix;

pub use explain::{build_group_explanations, GroupExplanation};
pub use groups::{extract_groups, DEFAULT_GROUP};
pub use index::RegistryIndex;
pub use matrix::{build_permission_matrix, PermissionMatrix};

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::table::Table;

/// Everything derived from one load, bundled for rendering or JSON export.
/// Rebuilt from scratch on every load; nothing carries over between loads.
#[derive(Debug, Clone, Serialize)]
pub struct AccessReport {
    /// Distinct group names, "Default" first when present.
    pub groups: Vec<String>,
    pub matrix: PermissionMatrix,
    pub explanations: HashMap<String, GroupExplanation>,
}

/// Run the full derivation pipeline over a validated table.
pub fn build_report(table: &Table) -> AccessReport {
    let groups = extract_groups(table);
    let matrix = build_permission_matrix(table, &groups);
    let explanations = build_group_explanations(table, &groups);
    info!(
        groups = groups.len(),
        modules = matrix.modules.len(),
        "report derived"
    );
    AccessReport {
        groups,
        matrix,
        explanations,
    }
}
