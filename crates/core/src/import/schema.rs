//! Declarative schema re-validation of assembled candidates.
//!
//! A second, independent gate after row-level parsing: the `garde` rules
//! declared on [`ParsedAssetRow`] (string min-length, numeric min bounds,
//! UUID format, URL format) are enforced uniformly no matter which code path
//! produced the candidate. Field additions that bypass row-level logic still
//! hit this gate.

use garde::Validate;
use uuid::Uuid;

use super::types::ParsedAssetRow;

/// Re-validates an assembled candidate against its declared schema.
///
/// # Errors
///
/// Returns the schema violations as human-readable issue strings, one per
/// violated rule, in the same shape the row parser produces.
pub fn validate_schema(row: &ParsedAssetRow) -> Result<(), Vec<String>> {
    let mut issues: Vec<String> = match row.validate() {
        Ok(()) => Vec::new(),
        Err(report) => report
            .iter()
            .map(|(path, error)| format!("{path}: {error}"))
            .collect(),
    };

    // Identifier format sits outside the derive rules.
    if let Some(raw) = row.parent_group_id.as_deref() {
        if Uuid::parse_str(raw).is_err() {
            issues.push(format!("parent_group_id: \"{raw}\" is not a valid UUID"));
        }
    }

    if issues.is_empty() { Ok(()) } else { Err(issues) }
}

#[cfg(test)]
mod tests {
    use super::super::types::{AssetStatus, AssetType};
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn valid_row() -> ParsedAssetRow {
        ParsedAssetRow {
            name: "Forklift".to_string(),
            description: Some("Warehouse forklift".to_string()),
            category: Some("equipment".to_string()),
            purchase_date: None,
            purchase_cost: dec!(15000),
            current_value: dec!(12000),
            status: AssetStatus::Active,
            location: None,
            serial_number: None,
            asset_type: AssetType::Individual,
            quantity: 1,
            parent_group_id: None,
            image_url: None,
        }
    }

    #[test]
    fn test_valid_row_passes() {
        assert!(validate_schema(&valid_row()).is_ok());
    }

    #[test]
    fn test_single_char_name_rejected() {
        let mut row = valid_row();
        row.name = "X".to_string();

        let issues = validate_schema(&row).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("name"));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut row = valid_row();
        row.purchase_cost = dec!(-1);

        let issues = validate_schema(&row).unwrap_err();
        assert!(issues[0].starts_with("purchase_cost"));
    }

    #[test]
    fn test_negative_current_value_rejected() {
        let mut row = valid_row();
        row.current_value = Decimal::NEGATIVE_ONE;

        let issues = validate_schema(&row).unwrap_err();
        assert!(issues[0].starts_with("current_value"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut row = valid_row();
        row.quantity = 0;

        let issues = validate_schema(&row).unwrap_err();
        assert!(issues[0].starts_with("quantity"));
    }

    #[test]
    fn test_malformed_parent_group_id_rejected() {
        let mut row = valid_row();
        row.parent_group_id = Some("group-7".to_string());

        let issues = validate_schema(&row).unwrap_err();
        assert!(issues[0].starts_with("parent_group_id"));
    }

    #[test]
    fn test_well_formed_parent_group_id_passes() {
        let mut row = valid_row();
        row.parent_group_id = Some(Uuid::new_v4().to_string());

        assert!(validate_schema(&row).is_ok());
    }

    #[test]
    fn test_malformed_image_url_rejected() {
        let mut row = valid_row();
        row.image_url = Some("not a url".to_string());

        let issues = validate_schema(&row).unwrap_err();
        assert!(issues[0].starts_with("image_url"));
    }

    #[test]
    fn test_violations_accumulate() {
        let mut row = valid_row();
        row.name = "Y".to_string();
        row.purchase_cost = dec!(-10);
        row.quantity = -3;

        let issues = validate_schema(&row).unwrap_err();
        assert_eq!(issues.len(), 3);
    }
}
