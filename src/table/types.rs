use once_cell::sync::Lazy;

/// Columns every registry export must carry, canonical lowercase form.
pub static REQUIRED_COLUMNS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut cols = vec!["identifier".to_string(), "levels".to_string()];
    cols.extend((1..=10).map(|n| format!("key{n}")));
    cols.push("value".to_string());
    cols
});

/// One row of the registry export. Ten generic classification slots plus a
/// free-text payload; which slots mean what depends on the row kind
/// (key1 == "Group" marks a group-scoped row, key3 discriminates further).
#[derive(Debug, Clone)]
pub struct Record {
    pub identifier: String,
    pub levels: String,
    /// key1..key10, stored zero-based. Use [`Record::key`] for 1-based access.
    pub keys: [String; 10],
    /// Free-text payload; access rows carry a `;`-delimited module list here.
    pub value: String,
}

impl Record {
    /// 1-based accessor matching the export's `key1`..`key10` column names.
    pub fn key(&self, n: usize) -> &str {
        &self.keys[n - 1]
    }
}

/// A fully materialized registry export. Immutable after load; every
/// derivation is recomputed from scratch against a fresh table.
#[derive(Debug, Clone)]
pub struct Table {
    /// Canonical lowercase column names, in file order.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
