//! Stateless presentation adapter. Owns no data between loads; everything is
//! rebuilt from the [`AccessReport`] it is handed.

use anyhow::Result;
use std::io::Write;

use crate::report::{AccessReport, PermissionMatrix, DEFAULT_GROUP};

const GRID_DISCLAIMER: &str = "This table shows which user groups have access to specific modules \
(tables). A 'Yes' indicates the presence of explicit settings in the registry, while a 'No' \
indicates no explicit permissions found.";

const MODULE_COLUMN_LABEL: &str = "Has access to module";

/// Render the full report as plain text: group list with count, Yes/No grid,
/// then per-group detail sections.
pub fn render_text<W: Write>(out: &mut W, report: &AccessReport) -> Result<()> {
    writeln!(out, "User groups")?;
    writeln!(out, "-----------")?;
    for group in &report.groups {
        writeln!(out, "  {group}")?;
    }
    writeln!(out, "Total user groups: {}", report.groups.len())?;
    writeln!(out)?;

    render_matrix(out, &report.matrix)?;
    writeln!(out)?;
    render_explanations(out, report)?;
    Ok(())
}

/// Render the report as pretty JSON, for consumption by other tooling.
pub fn render_json<W: Write>(out: &mut W, report: &AccessReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn render_matrix<W: Write>(out: &mut W, matrix: &PermissionMatrix) -> Result<()> {
    writeln!(out, "Module access by group")?;
    writeln!(out, "----------------------")?;
    writeln!(out, "{GRID_DISCLAIMER}")?;
    writeln!(out)?;

    let width = matrix
        .modules
        .iter()
        .map(String::len)
        .chain([MODULE_COLUMN_LABEL.len()])
        .max()
        .unwrap_or(0);

    write!(out, "{MODULE_COLUMN_LABEL:<width$}")?;
    for group in &matrix.groups {
        // "Yes" is the widest cell value a narrow group name has to fit
        write!(out, " | {:<w$}", group, w = group.len().max(3))?;
    }
    writeln!(out)?;

    for (module, row) in matrix.modules.iter().zip(&matrix.cells) {
        write!(out, "{module:<width$}")?;
        for (group, present) in matrix.groups.iter().zip(row) {
            let mark = if *present { "Yes" } else { "No" };
            write!(out, " | {:<w$}", mark, w = group.len().max(3))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_explanations<W: Write>(out: &mut W, report: &AccessReport) -> Result<()> {
    writeln!(out, "Group details")?;
    writeln!(out, "-------------")?;
    for group in &report.groups {
        writeln!(out, "{group}")?;
        let Some(explanation) = report.explanations.get(group) else {
            continue;
        };
        if explanation.uses_default {
            writeln!(
                out,
                "  No module access settings specified. See \"{DEFAULT_GROUP}\" for what applies."
            )?;
            continue;
        }
        writeln!(out, "  Modules with specific access settings:")?;
        for module in &explanation.modules {
            writeln!(out, "    {module}")?;
        }
    }
    Ok(())
}
