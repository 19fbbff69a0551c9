use std::collections::HashMap;

use serde::Serialize;

use crate::report::index::RegistryIndex;
use crate::table::Table;

/// Explicit module grants for one group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupExplanation {
    /// Granted module names: access payloads split on `;`, each piece
    /// trimmed, empty-after-trim pieces dropped, merged across all matching
    /// rows, sorted ascending.
    pub modules: Vec<String>,
    /// Set when no explicit grants exist; the renderer then points the
    /// reader at the default group.
    pub uses_default: bool,
}

/// Per-group breakdown of explicitly granted modules. Every supplied group
/// gets an entry, possibly with an empty list and the fallback flag set.
pub fn build_group_explanations(
    table: &Table,
    groups: &[String],
) -> HashMap<String, GroupExplanation> {
    let index = RegistryIndex::build(table);
    groups
        .iter()
        .map(|group| {
            let mut modules: Vec<String> = index
                .access_values(group)
                .iter()
                .flat_map(|value| value.split(';'))
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect();
            modules.sort();
            let uses_default = modules.is_empty();
            (
                group.clone(),
                GroupExplanation {
                    modules,
                    uses_default,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::extract_groups;
    use crate::report::testutil::{row, table};

    #[test]
    fn splits_trims_and_sorts_payloads() {
        let t = table(vec![
            row("Group", "Sales", "", "", ""),
            row("Group", "Sales", "Table Access", "", " Mod2 ; Mod1"),
        ]);
        let groups = extract_groups(&t);
        let explanations = build_group_explanations(&t, &groups);
        let sales = &explanations["Sales"];
        assert_eq!(sales.modules, ["Mod1", "Mod2"]);
        assert!(!sales.uses_default);
    }

    #[test]
    fn merges_payloads_across_rows() {
        let t = table(vec![
            row("Group", "Ops", "Table Access", "", "Stock;Orders"),
            row("Group", "Ops", "Table Access", "", "Audit"),
        ]);
        let groups = extract_groups(&t);
        let explanations = build_group_explanations(&t, &groups);
        assert_eq!(explanations["Ops"].modules, ["Audit", "Orders", "Stock"]);
    }

    #[test]
    fn trailing_semicolon_pieces_are_dropped() {
        let t = table(vec![row("Group", "Ops", "Table Access", "", "Stock;;")]);
        let groups = extract_groups(&t);
        let explanations = build_group_explanations(&t, &groups);
        assert_eq!(explanations["Ops"].modules, ["Stock"]);
    }

    #[test]
    fn group_without_access_rows_gets_fallback_flag() {
        let t = table(vec![
            row("Group", "Sales", "Table", "Orders", ""),
            row("Group", "Default", "Table Access", "", "Orders"),
        ]);
        let groups = extract_groups(&t);
        let explanations = build_group_explanations(&t, &groups);
        let sales = &explanations["Sales"];
        assert!(sales.modules.is_empty());
        assert!(sales.uses_default);
        assert!(!explanations["Default"].uses_default);
    }

    #[test]
    fn every_supplied_group_has_an_entry() {
        let t = table(vec![]);
        let groups = vec!["A".to_string(), "B".to_string()];
        let explanations = build_group_explanations(&t, &groups);
        assert_eq!(explanations.len(), 2);
        assert!(explanations["A"].uses_default);
        assert!(explanations["B"].uses_default);
    }
}
