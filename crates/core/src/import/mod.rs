//! CSV asset import pipeline.
//!
//! Four ordered stages, strictly sequential per upload:
//!
//! 1. Column normalization - arbitrary header spellings onto the fixed
//!    internal column set ([`normalize`]).
//! 2. Row parsing/validation - typed candidates with per-row issue
//!    accumulation ([`row`]).
//! 3. Schema re-validation - the declarative safety net ([`schema`]).
//! 4. Quota-checked batch insert - decided by [`crate::quota`], executed by
//!    the database layer.
//!
//! [`parse_csv`] runs stages 1-3 over a whole file: every data row is judged
//! independently, rejected rows become [`RowError`]s, and surviving rows are
//! handed to the caller for the quota gate and the single batch insert.

pub mod error;
pub mod normalize;
pub mod row;
pub mod schema;
pub mod types;

#[cfg(test)]
mod normalize_props;

use std::collections::BTreeMap;

use csv::{ReaderBuilder, Trim};

pub use error::CsvImportError;
pub use normalize::{AssetColumn, normalize_key, resolve_column};
pub use row::{RawRecord, coerce_with_default, parse_flexible_date, parse_row};
pub use schema::validate_schema;
pub use types::{AssetStatus, AssetType, ParsedAssetRow, RowError};

/// Outcome of running stages 1-3 over one uploaded file.
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Rows that passed both validation gates, in file order.
    pub rows: Vec<ParsedAssetRow>,
    /// Rejected rows with their issues, in file order.
    pub errors: Vec<RowError>,
    /// Canonical columns that more than one header mapped onto. The later
    /// column silently wins; callers may want to log these.
    pub duplicate_columns: Vec<&'static str>,
}

/// Parses and validates an uploaded CSV file.
///
/// The header row counts as row 1, so the first data row is row 2. Rows are
/// judged independently: a rejected row never aborts the file.
///
/// # Errors
///
/// Returns [`CsvImportError::Malformed`] when the bytes cannot be read as
/// CSV, and [`CsvImportError::Empty`] when the file has no data rows.
pub fn parse_csv(data: &[u8]) -> Result<ImportReport, CsvImportError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| CsvImportError::Malformed(e.to_string()))?
        .clone();

    let columns: Vec<Option<AssetColumn>> = headers.iter().map(resolve_column).collect();
    let duplicate_columns = duplicated_targets(&columns);

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    let mut data_rows = 0usize;

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CsvImportError::Malformed(e.to_string()))?;
        data_rows += 1;
        let row_number = index + 2;

        let mut raw = RawRecord::new();
        for (position, value) in record.iter().enumerate() {
            if let Some(Some(column)) = columns.get(position) {
                // Later duplicate columns overwrite earlier ones.
                raw.insert(*column, value.to_string());
            }
        }

        match parse_row(&raw, row_number) {
            Ok(candidate) => match validate_schema(&candidate) {
                Ok(()) => rows.push(candidate),
                Err(issues) => errors.push(RowError {
                    row: row_number,
                    issues,
                }),
            },
            Err(row_error) => errors.push(row_error),
        }
    }

    if data_rows == 0 {
        return Err(CsvImportError::Empty);
    }

    Ok(ImportReport {
        rows,
        errors,
        duplicate_columns,
    })
}

/// Returns the canonical names of columns targeted by more than one header.
fn duplicated_targets(columns: &[Option<AssetColumn>]) -> Vec<&'static str> {
    let mut counts: BTreeMap<AssetColumn, usize> = BTreeMap::new();
    for column in columns.iter().flatten() {
        *counts.entry(*column).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(column, _)| column.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_aliases_produce_identical_rows() {
        let plain = parse_csv(b"name,purchase_cost,purchase_date\nLaptop,1200,2024-03-15\n")
            .unwrap();
        let aliased =
            parse_csv(b"Asset Name,Purchase Price,Acquisition Date\nLaptop,1200,15/03/2024\n")
                .unwrap();

        assert_eq!(plain.rows.len(), 1);
        assert_eq!(aliased.rows.len(), 1);
        assert_eq!(plain.rows[0].name, aliased.rows[0].name);
        assert_eq!(plain.rows[0].purchase_cost, aliased.rows[0].purchase_cost);
        assert_eq!(plain.rows[0].purchase_date, aliased.rows[0].purchase_date);
        assert_eq!(
            plain.rows[0].purchase_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }

    #[test]
    fn test_partial_validity() {
        let csv = b"name,purchase_cost\n\
            Printer,300\n\
            ,400\n\
            Scanner,150\n\
            Router,\n\
            Switch,90\n";

        let report = parse_csv(csv).unwrap();

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].row, 3);
        assert!(report.errors[0].issues[0].contains("name"));
        assert_eq!(report.errors[1].row, 5);
        assert!(report.errors[1].issues[0].contains("purchase cost"));

        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Printer", "Scanner", "Switch"]);
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let result = parse_csv(b"name,purchase_cost\n");
        assert!(matches!(result, Err(CsvImportError::Empty)));
    }

    #[test]
    fn test_zero_byte_file_is_empty() {
        let result = parse_csv(b"");
        assert!(matches!(result, Err(CsvImportError::Empty)));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let result = parse_csv(b"name,purchase_cost\n\xff\xfe,1200\n");
        assert!(matches!(result, Err(CsvImportError::Malformed(_))));
    }

    #[test]
    fn test_unmapped_headers_dropped() {
        let report =
            parse_csv(b"name,warranty_until,purchase_cost\nLaptop,2030-01-01,900\n").unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].purchase_cost, dec!(900));
    }

    #[test]
    fn test_duplicate_headers_later_column_wins() {
        let report = parse_csv(b"name,asset_name,purchase_cost\nFirst,Second,100\n").unwrap();

        assert_eq!(report.duplicate_columns, vec!["name"]);
        assert_eq!(report.rows[0].name, "Second");
    }

    #[test]
    fn test_duplicate_header_later_empty_cell_wins() {
        // Last-one-wins applies to the column, not the value: an empty later
        // cell blanks out the earlier one.
        let report = parse_csv(b"name,asset_name,purchase_cost\nFirst,,100\n").unwrap();

        assert_eq!(report.rows.len(), 0);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].issues[0].contains("name"));
    }

    #[test]
    fn test_schema_gate_catches_negative_cost() {
        let report = parse_csv(b"name,purchase_cost\nLaptop,-500\n").unwrap();

        assert_eq!(report.rows.len(), 0);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].row, 2);
        assert!(report.errors[0].issues[0].starts_with("purchase_cost"));
    }

    #[test]
    fn test_schema_gate_catches_short_name() {
        let report = parse_csv(b"name,purchase_cost\nX,500\n").unwrap();

        assert_eq!(report.rows.len(), 0);
        assert!(report.errors[0].issues[0].starts_with("name"));
    }

    #[test]
    fn test_group_row_round_trip() {
        let csv = b"name,type,quantity,purchase_cost\nChairs,group,40,25\n";
        let report = parse_csv(csv).unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].asset_type, AssetType::Group);
        assert_eq!(report.rows[0].quantity, 40);
    }

    #[test]
    fn test_group_without_quantity_rejected() {
        let csv = b"name,type,quantity,purchase_cost\nChairs,group,,25\n";
        let report = parse_csv(csv).unwrap();

        assert_eq!(report.rows.len(), 0);
        assert!(report.errors[0].issues[0].contains("Quantity"));
    }

    #[test]
    fn test_full_row_all_fields() {
        let csv = b"Asset Name,Details,Category,State,Location,Serial,Acquired Date,Purchase Value,Value,Type,Total Items,Group ID\n\
            Pallet Rack,Steel racking,storage,maintenance,Warehouse 3,SN-445,01/02/2023,8000,6500,group,12,6e4ef9a4-5c1f-4bcb-b832-57ad3a9e0101\n";

        let report = parse_csv(csv).unwrap();
        assert!(report.errors.is_empty());

        let row = &report.rows[0];
        assert_eq!(row.name, "Pallet Rack");
        assert_eq!(row.description.as_deref(), Some("Steel racking"));
        assert_eq!(row.category.as_deref(), Some("storage"));
        assert_eq!(row.status, AssetStatus::Maintenance);
        assert_eq!(row.location.as_deref(), Some("Warehouse 3"));
        assert_eq!(row.serial_number.as_deref(), Some("SN-445"));
        assert_eq!(
            row.purchase_date,
            Some(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap())
        );
        assert_eq!(row.purchase_cost, dec!(8000));
        assert_eq!(row.current_value, dec!(6500));
        assert_eq!(row.asset_type, AssetType::Group);
        assert_eq!(row.quantity, 12);
        assert!(row.parent_group_uuid().is_some());
    }

    #[test]
    fn test_error_order_matches_file_order() {
        let csv = b"name,purchase_cost\n,1\n,2\n,3\n";
        let report = parse_csv(csv).unwrap();

        let rows: Vec<usize> = report.errors.iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![2, 3, 4]);
    }
}
