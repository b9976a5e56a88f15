//! CSV export for sweep results
//!
//! Two layouts are written: a wide table of mean expansion counts with one
//! row per branching factor and one column per depth, and a long table with
//! every statistic of every completed cell.

use std::{fs, path::Path};

use crate::{
    Result,
    error::Error,
    pipeline::ResultsTable,
};

/// Exporter for sweep result tables
pub struct ResultsCsvExporter;

impl ResultsCsvExporter {
    /// Write the wide mean-expansion table.
    ///
    /// Header is `branching_factor,<depth>...`; cells that were not run are
    /// left empty.
    pub fn write_table(table: &ResultsTable, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec!["branching_factor".to_string()];
        header.extend(table.depths().iter().map(|depth| depth.to_string()));
        writer.write_record(&header)?;

        for &branching_factor in table.branching_factors() {
            let mut row = vec![branching_factor.to_string()];
            row.extend(table.depths().iter().map(|&depth| {
                table
                    .mean_expanded(branching_factor, depth)
                    .map(|mean| mean.to_string())
                    .unwrap_or_default()
            }));
            writer.write_record(&row)?;
        }

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush results table {path:?}"),
            source,
        })
    }

    /// Write one row per completed cell with all summary statistics.
    pub fn write_cells(table: &ResultsTable, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let mut writer = csv::Writer::from_path(path)?;
        let mut wrote_any = false;
        for cell in table.cells() {
            writer.serialize(cell)?;
            wrote_any = true;
        }
        if !wrote_any {
            writer.write_record(CELL_HEADER)?;
        }
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush cell summaries {path:?}"),
            source,
        })
    }

    /// Read a wide table back as `(branching_factor, depth, mean)` triples.
    pub fn read_table(path: &Path) -> Result<Vec<(u32, u32, f64)>> {
        let mut reader = csv::Reader::from_path(path)?;
        let depths: Vec<Option<u32>> = reader
            .headers()?
            .iter()
            .skip(1)
            .map(|h| h.parse().ok())
            .collect();

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            let Some(branching_factor) = record.get(0).and_then(|b| b.parse::<u32>().ok()) else {
                continue;
            };
            for (value, depth) in record.iter().skip(1).zip(&depths) {
                if let (Some(depth), Ok(mean)) = (depth, value.parse::<f64>()) {
                    entries.push((branching_factor, *depth, mean));
                }
            }
        }
        Ok(entries)
    }
}

const CELL_HEADER: [&str; 8] = [
    "branching_factor",
    "depth",
    "repetitions",
    "mean_expanded",
    "std_dev_expanded",
    "min_expanded",
    "max_expanded",
    "mean_cost",
];

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            operation: format!("create output directory {parent:?}"),
            source,
        })?;
    }
    Ok(())
}

/// Column names of [`ResultsCsvExporter::write_cells`], in order.
pub fn cell_columns() -> &'static [&'static str] {
    &CELL_HEADER
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::CellSummary;

    fn table() -> ResultsTable {
        let mut table = ResultsTable::new(&[2, 3], &[4, 6]);
        table.insert(CellSummary::from_runs(2, 4, &[10, 12], &[1, 1]).unwrap());
        table.insert(CellSummary::from_runs(3, 4, &[20], &[0]).unwrap());
        table
    }

    #[test]
    fn wide_table_leaves_missing_cells_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out").join("experiment_results.csv");
        ResultsCsvExporter::write_table(&table(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["branching_factor,4,6", "2,11,", "3,20,"]);

        let entries = ResultsCsvExporter::read_table(&path).unwrap();
        assert_eq!(entries, vec![(2, 4, 11.0), (3, 4, 20.0)]);
    }

    #[test]
    fn long_table_has_one_row_per_cell() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("cells.csv");
        ResultsCsvExporter::write_cells(&table(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(cell_columns().join(",").as_str()));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn empty_long_table_still_has_a_header() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("cells.csv");
        ResultsCsvExporter::write_cells(&ResultsTable::new(&[2], &[2]), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), cell_columns().join(","));
    }
}
