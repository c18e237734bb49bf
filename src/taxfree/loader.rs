//! Load declared tax-free plan tables from transcribed CSV files

use std::path::Path;

use csv::Reader;
use thiserror::Error;

use super::table::{DeclaredTable, TaxFreePlanRow};

/// Errors raised while loading a declared table.
///
/// The sorted/gap-free age contract from the data model is enforced here at
/// the boundary, so the windowing code never has to fabricate or reorder
/// ages.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed declared table: {0}")]
    Csv(#[from] csv::Error),

    #[error("declared table ages must be ascending and gap-free: age {found} follows age {prev}")]
    AgeOrdering { prev: u8, found: u8 },
}

/// Raw CSV row matching the transcription template's column headers
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "AnnualContribution")]
    annual_contribution: f64,
    #[serde(rename = "Distribution")]
    distribution: f64,
    #[serde(rename = "Fee")]
    fee: f64,
    #[serde(rename = "CumulativeBalance")]
    cumulative_balance: f64,
    #[serde(rename = "CumulativeDistribution")]
    cumulative_distribution: f64,
    #[serde(rename = "CumulativeFees")]
    cumulative_fees: f64,
    #[serde(rename = "DeathBenefit")]
    death_benefit: f64,
}

impl CsvRow {
    fn into_row(self) -> TaxFreePlanRow {
        TaxFreePlanRow {
            age: self.age,
            annual_contribution: self.annual_contribution,
            distribution: self.distribution,
            fee: self.fee,
            cumulative_balance: self.cumulative_balance,
            cumulative_distribution: self.cumulative_distribution,
            cumulative_fees: self.cumulative_fees,
            death_benefit: self.death_benefit,
        }
    }
}

/// Load a declared table from a CSV file
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<DeclaredTable, TableError> {
    collect_rows(Reader::from_path(path)?)
}

/// Load a declared table from any reader (e.g., string buffer, upload stream)
pub fn load_table_from_reader<R: std::io::Read>(reader: R) -> Result<DeclaredTable, TableError> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<DeclaredTable, TableError> {
    let mut rows: Vec<TaxFreePlanRow> = Vec::new();

    for result in reader.deserialize() {
        let raw: CsvRow = result?;
        let row = raw.into_row();

        if let Some(prev) = rows.last() {
            if row.age != prev.age + 1 {
                return Err(TableError::AgeOrdering {
                    prev: prev.age,
                    found: row.age,
                });
            }
        }
        rows.push(row);
    }

    Ok(DeclaredTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Age,AnnualContribution,Distribution,Fee,CumulativeBalance,CumulativeDistribution,CumulativeFees,DeathBenefit\n";

    #[test]
    fn test_load_valid_table() {
        let csv = format!(
            "{HEADER}\
             45,12000,0,180,12000,0,180,500000\n\
             46,12000,0,185,24500,0,365,500000\n\
             47,0,8000,190,18000,8000,555,480000\n"
        );

        let table = load_table_from_reader(csv.as_bytes()).unwrap();
        let rows = table.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].age, 45);
        assert_eq!(rows[2].distribution, 8_000.0);
        assert_eq!(rows[2].death_benefit, 480_000.0);
    }

    #[test]
    fn test_gap_in_ages_rejected() {
        let csv = format!(
            "{HEADER}\
             45,12000,0,180,12000,0,180,500000\n\
             48,12000,0,185,24500,0,365,500000\n"
        );

        let err = load_table_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::AgeOrdering { prev: 45, found: 48 }));
    }

    #[test]
    fn test_descending_ages_rejected() {
        let csv = format!(
            "{HEADER}\
             46,12000,0,180,12000,0,180,500000\n\
             45,12000,0,185,24500,0,365,500000\n"
        );

        assert!(matches!(
            load_table_from_reader(csv.as_bytes()),
            Err(TableError::AgeOrdering { .. })
        ));
    }

    #[test]
    fn test_malformed_row_rejected() {
        let csv = format!(
            "{HEADER}\
             45,not-a-number,0,180,12000,0,180,500000\n"
        );

        assert!(matches!(
            load_table_from_reader(csv.as_bytes()),
            Err(TableError::Csv(_))
        ));
    }

    #[test]
    fn test_empty_table_loads() {
        let table = load_table_from_reader(HEADER.as_bytes()).unwrap();
        assert!(table.is_empty());
    }
}
