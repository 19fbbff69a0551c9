use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{collections::HashMap, fs::File, path::Path};
use tracing::info;

use super::types::{Record, Table, REQUIRED_COLUMNS};

/// Parse a delimited registry export into a [`Table`].
///
/// Header names are normalized to lowercase before the required-column check,
/// so `Key1` and `KEY1` both satisfy `key1`. Extra columns are tolerated and
/// ignored. Cells are trimmed; rows shorter than the header read as empty
/// strings for the missing cells.
pub fn load_table(path: &Path, delimiter: u8) -> Result<Table> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(file);

    let columns: Vec<String> = rdr
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|req| !columns.contains(*req))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        bail!(
            "{} is missing required columns: {} (required: {})",
            path.display(),
            missing.join(", "),
            REQUIRED_COLUMNS.join(", ")
        );
    }

    // All required columns verified present above, so indexing is safe.
    let index: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    let id_idx = index["identifier"];
    let levels_idx = index["levels"];
    let value_idx = index["value"];
    let key_idx: [usize; 10] = std::array::from_fn(|i| index[format!("key{}", i + 1).as_str()]);

    let mut records = Vec::new();
    for (n, result) in rdr.records().enumerate() {
        let row = result.with_context(|| format!("parsing row {} of {}", n + 2, path.display()))?;
        let cell = |i: usize| row.get(i).map(str::trim).unwrap_or("").to_string();
        records.push(Record {
            identifier: cell(id_idx),
            levels: cell(levels_idx),
            keys: std::array::from_fn(|i| cell(key_idx[i])),
            value: cell(value_idx),
        });
    }

    let table = Table { columns, records };
    info!(
        file = %path.display(),
        rows = table.len(),
        cols = table.columns.len(),
        "registry loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "identifier,levels,key1,key2,key3,key4,key5,key6,key7,key8,key9,key10,value";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("create temp file");
        tmp.write_all(content.as_bytes()).expect("write temp csv");
        tmp.flush().expect("flush temp csv");
        tmp
    }

    #[test]
    fn loads_rows_and_trims_cells() -> Result<()> {
        let csv = format!("{HEADER}\nr1,2, Group , Default ,Table,Orders,,,,,,, x \n");
        let tmp = write_csv(&csv);
        let table = load_table(tmp.path(), b',')?;
        assert_eq!(table.len(), 1);
        let rec = &table.records[0];
        assert_eq!(rec.identifier, "r1");
        assert_eq!(rec.key(1), "Group");
        assert_eq!(rec.key(2), "Default");
        assert_eq!(rec.key(4), "Orders");
        assert_eq!(rec.value, "x");
        Ok(())
    }

    #[test]
    fn lowercases_mixed_case_headers() -> Result<()> {
        let csv = "Identifier,LEVELS,Key1,Key2,Key3,Key4,Key5,Key6,Key7,Key8,Key9,Key10,Value\n\
                   r1,1,Group,Sales,Table,Orders,,,,,,,\n";
        let tmp = write_csv(csv);
        let table = load_table(tmp.path(), b',')?;
        assert_eq!(table.columns[0], "identifier");
        assert_eq!(table.columns[12], "value");
        assert_eq!(table.records[0].key(2), "Sales");
        Ok(())
    }

    #[test]
    fn rejects_missing_required_column() {
        // key7 left out of the header
        let csv = "identifier,levels,key1,key2,key3,key4,key5,key6,key8,key9,key10,value\n";
        let tmp = write_csv(csv);
        let err = load_table(tmp.path(), b',').unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing required columns"), "got: {msg}");
        assert!(msg.contains("key7"), "got: {msg}");
    }

    #[test]
    fn short_rows_read_as_empty_cells() -> Result<()> {
        let csv = format!("{HEADER}\nr1,1,Group,Sales\n");
        let tmp = write_csv(&csv);
        let table = load_table(tmp.path(), b',')?;
        let rec = &table.records[0];
        assert_eq!(rec.key(2), "Sales");
        assert_eq!(rec.key(3), "");
        assert_eq!(rec.value, "");
        Ok(())
    }

    #[test]
    fn supports_alternate_delimiter() -> Result<()> {
        let csv = format!(
            "{}\nr1;1;Group;Ops;Table;Stock;;;;;;;\n",
            HEADER.replace(',', ";")
        );
        let tmp = write_csv(&csv);
        let table = load_table(tmp.path(), b';')?;
        assert_eq!(table.records[0].key(2), "Ops");
        assert_eq!(table.records[0].key(4), "Stock");
        Ok(())
    }

    #[test]
    fn empty_file_with_header_yields_empty_table() -> Result<()> {
        let tmp = write_csv(&format!("{HEADER}\n"));
        let table = load_table(tmp.path(), b',')?;
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 13);
        Ok(())
    }
}
