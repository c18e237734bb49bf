//! Declared tax-free plan tables: windowing and CSV loading

mod loader;
mod table;

pub use loader::{load_table, load_table_from_reader, TableError};
pub use table::{window, DeclaredTable, DeclaredTableSource, TaxFreePlanRow};
