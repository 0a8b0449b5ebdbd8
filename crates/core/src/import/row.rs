//! Row-level parsing and validation.
//!
//! Converts one normalized record into a typed [`ParsedAssetRow`], collecting
//! every issue for the row before judging it - a user fixing a spreadsheet
//! wants all of a row's problems at once, not one per upload.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::normalize::AssetColumn;
use super::types::{AssetStatus, AssetType, ParsedAssetRow, RowError};

/// One data row after column normalization: canonical column to raw cell text.
///
/// When two file headers map to the same canonical column, the later column
/// overwrites the earlier one on insert (last-one-wins).
pub type RawRecord = BTreeMap<AssetColumn, String>;

/// Date formats tried in order: ISO first, then day-first, then month-first,
/// then the looser fallbacks.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

/// Parses and validates one record.
///
/// # Errors
///
/// Returns a [`RowError`] carrying every issue found in the row. The row is
/// then excluded from import; processing continues with the next row.
pub fn parse_row(record: &RawRecord, row_number: usize) -> Result<ParsedAssetRow, RowError> {
    let mut issues: Vec<String> = Vec::new();

    let name = cell(record, AssetColumn::Name).unwrap_or_default().to_string();
    if name.is_empty() {
        issues.push("Missing required name value".to_string());
    }

    let purchase_cost = cell(record, AssetColumn::PurchaseCost).and_then(parse_amount);
    if purchase_cost.is_none() {
        issues.push("Missing required purchase cost value".to_string());
    }

    let purchase_date = match cell(record, AssetColumn::PurchaseDate) {
        Some(raw) => match parse_flexible_date(raw) {
            Some(date) => Some(date),
            None => {
                issues.push(format!("Unrecognized purchase date \"{raw}\""));
                None
            }
        },
        None => None,
    };

    let status = coerce_with_default(cell(record, AssetColumn::Status), AssetStatus::parse);
    let asset_type = coerce_with_default(cell(record, AssetColumn::AssetType), AssetType::parse);

    let quantity = cell(record, AssetColumn::Quantity).and_then(parse_quantity);
    if asset_type == AssetType::Group && !quantity.is_some_and(|q| q >= 1) {
        issues.push(
            "Quantity is required for group assets and must be a positive integer".to_string(),
        );
    }

    if !issues.is_empty() {
        return Err(RowError {
            row: row_number,
            issues,
        });
    }

    let purchase_cost = purchase_cost.unwrap_or_default();
    let current_value = cell(record, AssetColumn::CurrentValue)
        .and_then(parse_amount)
        .unwrap_or(purchase_cost);

    Ok(ParsedAssetRow {
        name,
        description: owned_cell(record, AssetColumn::Description),
        category: owned_cell(record, AssetColumn::Category),
        purchase_date,
        purchase_cost,
        current_value,
        status,
        location: owned_cell(record, AssetColumn::Location),
        serial_number: owned_cell(record, AssetColumn::SerialNumber),
        asset_type,
        quantity: quantity.filter(|q| *q >= 1).unwrap_or(1),
        parent_group_id: owned_cell(record, AssetColumn::ParentGroupId),
        image_url: None,
    })
}

/// Resolves an enum-like cell against its parser, falling back to the default
/// instead of raising an issue. Invalid enum values are not errors at this
/// stage; only requiredness and range checks halt a row.
pub fn coerce_with_default<T: Default>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    value.and_then(parse).unwrap_or_default()
}

/// Parses a date cell, trying ISO first, then day-first, then month-first,
/// then the generic fallbacks.
#[must_use]
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Returns the trimmed cell for a column, treating empty cells as absent.
fn cell(record: &RawRecord, column: AssetColumn) -> Option<&str> {
    record
        .get(&column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn owned_cell(record: &RawRecord, column: AssetColumn) -> Option<String> {
    cell(record, column).map(str::to_string)
}

/// Coerces an amount cell to a `Decimal`, stripping thousands-separator
/// commas. Unparseable values are treated as absent, not as an issue - the
/// requiredness check on the field produces the actual issue.
fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.replace(',', "").trim().parse::<Decimal>().ok()
}

/// Coerces a quantity cell to an integer, stripping commas.
fn parse_quantity(raw: &str) -> Option<i64> {
    raw.replace(',', "").trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn record(cells: &[(AssetColumn, &str)]) -> RawRecord {
        cells
            .iter()
            .map(|(column, value)| (*column, (*value).to_string()))
            .collect()
    }

    fn minimal_record() -> RawRecord {
        record(&[
            (AssetColumn::Name, "Laptop"),
            (AssetColumn::PurchaseCost, "1200"),
        ])
    }

    #[test]
    fn test_minimal_valid_row() {
        let row = parse_row(&minimal_record(), 2).unwrap();

        assert_eq!(row.name, "Laptop");
        assert_eq!(row.purchase_cost, dec!(1200));
        assert_eq!(row.current_value, dec!(1200));
        assert_eq!(row.status, AssetStatus::Active);
        assert_eq!(row.asset_type, AssetType::Individual);
        assert_eq!(row.quantity, 1);
        assert_eq!(row.purchase_date, None);
        assert_eq!(row.image_url, None);
    }

    #[test]
    fn test_missing_name() {
        let mut rec = minimal_record();
        rec.remove(&AssetColumn::Name);

        let err = parse_row(&rec, 3).unwrap_err();
        assert_eq!(err.row, 3);
        assert_eq!(err.issues, vec!["Missing required name value".to_string()]);
    }

    #[test]
    fn test_empty_name_is_missing() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::Name, "   ".to_string());

        let err = parse_row(&rec, 2).unwrap_err();
        assert!(err.issues[0].contains("name"));
    }

    #[test]
    fn test_missing_purchase_cost() {
        let mut rec = minimal_record();
        rec.remove(&AssetColumn::PurchaseCost);

        let err = parse_row(&rec, 2).unwrap_err();
        assert_eq!(
            err.issues,
            vec!["Missing required purchase cost value".to_string()]
        );
    }

    #[test]
    fn test_unparseable_cost_is_treated_as_missing() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::PurchaseCost, "about twelve".to_string());

        let err = parse_row(&rec, 2).unwrap_err();
        assert_eq!(
            err.issues,
            vec!["Missing required purchase cost value".to_string()]
        );
    }

    #[test]
    fn test_multiple_issues_collected() {
        let rec = record(&[
            (AssetColumn::PurchaseDate, "someday"),
            (AssetColumn::AssetType, "group"),
        ]);

        let err = parse_row(&rec, 5).unwrap_err();
        assert_eq!(err.row, 5);
        assert_eq!(err.issues.len(), 4);
        assert!(err.issues[0].contains("name"));
        assert!(err.issues[1].contains("purchase cost"));
        assert!(err.issues[2].contains("someday"));
        assert!(err.issues[3].contains("Quantity is required for group assets"));
    }

    #[rstest]
    #[case("2024-03-15")]
    #[case("15/03/2024")]
    #[case("2024/03/15")]
    #[case("15-03-2024")]
    #[case("15.03.2024")]
    fn test_date_spellings_normalize(#[case] raw: &str) {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::PurchaseDate, raw.to_string());

        let row = parse_row(&rec, 2).unwrap();
        assert_eq!(
            row.purchase_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }

    #[test]
    fn test_month_first_fallback() {
        // Day-first cannot interpret month 15, so month-first wins.
        assert_eq!(
            parse_flexible_date("03/15/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        // Ambiguous dates resolve day-first.
        assert_eq!(
            parse_flexible_date("04/05/2024"),
            NaiveDate::from_ymd_opt(2024, 5, 4)
        );
    }

    #[test]
    fn test_unparseable_date_cites_original() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::PurchaseDate, "Q3 2024".to_string());

        let err = parse_row(&rec, 2).unwrap_err();
        assert_eq!(err.issues, vec!["Unrecognized purchase date \"Q3 2024\""]);
    }

    #[test]
    fn test_amounts_strip_commas() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::PurchaseCost, "1,234.56".to_string());
        rec.insert(AssetColumn::CurrentValue, "1,000".to_string());

        let row = parse_row(&rec, 2).unwrap();
        assert_eq!(row.purchase_cost, dec!(1234.56));
        assert_eq!(row.current_value, dec!(1000));
    }

    #[test]
    fn test_negative_cost_passes_row_stage() {
        // Requiredness is the only amount check here; the schema gate
        // rejects negative amounts.
        let mut rec = minimal_record();
        rec.insert(AssetColumn::PurchaseCost, "-50".to_string());

        let row = parse_row(&rec, 2).unwrap();
        assert_eq!(row.purchase_cost, dec!(-50));
    }

    #[test]
    fn test_enum_fallbacks() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::Status, "exploded".to_string());
        rec.insert(AssetColumn::AssetType, "bundle".to_string());

        let row = parse_row(&rec, 2).unwrap();
        assert_eq!(row.status, AssetStatus::Active);
        assert_eq!(row.asset_type, AssetType::Individual);
    }

    #[test]
    fn test_group_requires_quantity() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::AssetType, "group".to_string());

        let err = parse_row(&rec, 4).unwrap_err();
        assert_eq!(
            err.issues,
            vec!["Quantity is required for group assets and must be a positive integer"]
        );
    }

    #[rstest]
    #[case("0")]
    #[case("-2")]
    #[case("many")]
    fn test_group_rejects_non_positive_quantity(#[case] quantity: &str) {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::AssetType, "group".to_string());
        rec.insert(AssetColumn::Quantity, quantity.to_string());

        let err = parse_row(&rec, 2).unwrap_err();
        assert!(err.issues[0].contains("Quantity is required for group assets"));
    }

    #[test]
    fn test_group_with_quantity() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::AssetType, "group".to_string());
        rec.insert(AssetColumn::Quantity, "2,500".to_string());

        let row = parse_row(&rec, 2).unwrap();
        assert_eq!(row.asset_type, AssetType::Group);
        assert_eq!(row.quantity, 2500);
    }

    #[test]
    fn test_individual_ignores_bad_quantity() {
        let mut rec = minimal_record();
        rec.insert(AssetColumn::Quantity, "several".to_string());

        let row = parse_row(&rec, 2).unwrap();
        assert_eq!(row.quantity, 1);
    }

    #[test]
    fn test_coerce_with_default() {
        assert_eq!(
            coerce_with_default(Some("sold"), AssetStatus::parse),
            AssetStatus::Sold
        );
        assert_eq!(
            coerce_with_default(Some("nonsense"), AssetStatus::parse),
            AssetStatus::Active
        );
        assert_eq!(
            coerce_with_default(None, AssetStatus::parse),
            AssetStatus::Active
        );
    }
}
