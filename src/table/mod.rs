pub mod load;
pub mod types;

pub use load::load_table;
pub use types::{Record, Table, REQUIRED_COLUMNS};
