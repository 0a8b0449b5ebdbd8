//! Typed candidates and row-level results for the asset import pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Asset lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// Asset is in service.
    #[default]
    Active,
    /// Asset is undergoing maintenance.
    Maintenance,
    /// Asset has been retired from service.
    Retired,
    /// Asset has been sold.
    Sold,
}

impl AssetStatus {
    /// Parses a status value, case-insensitively. Unrecognized values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "maintenance" => Some(Self::Maintenance),
            "retired" => Some(Self::Retired),
            "sold" => Some(Self::Sold),
            _ => None,
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Retired => "retired",
            Self::Sold => "sold",
        }
    }
}

/// Whether an asset row describes a single item or a counted group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// A single tracked item.
    #[default]
    Individual,
    /// A counted group of identical items.
    Group,
}

impl AssetType {
    /// Parses an asset type value, case-insensitively. Unrecognized values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "group" => Some(Self::Group),
            _ => None,
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
        }
    }
}

/// The fully-typed candidate for one importable asset.
///
/// Produced by the row parser and re-validated by the schema gate; a row that
/// survives both becomes exactly one database row. The `garde` rules are the
/// declarative contract the schema gate enforces regardless of which code path
/// assembled the candidate.
#[derive(Debug, Clone, Serialize, Deserialize, garde::Validate)]
pub struct ParsedAssetRow {
    /// Asset name.
    #[garde(length(min = 2))]
    pub name: String,
    /// Free-text description.
    #[garde(skip)]
    pub description: Option<String>,
    /// Category label.
    #[garde(skip)]
    pub category: Option<String>,
    /// Acquisition date.
    #[garde(skip)]
    pub purchase_date: Option<NaiveDate>,
    /// Acquisition cost.
    #[garde(custom(non_negative_amount))]
    pub purchase_cost: Decimal,
    /// Current book value; defaults to the purchase cost on import.
    #[garde(custom(non_negative_amount))]
    pub current_value: Decimal,
    /// Lifecycle status.
    #[garde(skip)]
    pub status: AssetStatus,
    /// Physical location.
    #[garde(skip)]
    pub location: Option<String>,
    /// Manufacturer serial number.
    #[garde(skip)]
    pub serial_number: Option<String>,
    /// Individual asset or counted group.
    #[garde(skip)]
    pub asset_type: AssetType,
    /// Unit count; at least 1, meaningful for group assets.
    #[garde(range(min = 1))]
    pub quantity: i64,
    /// Parent group reference, kept textual until the schema gate has
    /// confirmed it is a well-formed UUID.
    #[garde(skip)]
    pub parent_group_id: Option<String>,
    /// Image URL; always absent on import.
    #[garde(url)]
    pub image_url: Option<String>,
}

impl ParsedAssetRow {
    /// Returns the parent group id as a UUID, if present and well-formed.
    #[must_use]
    pub fn parent_group_uuid(&self) -> Option<Uuid> {
        self.parent_group_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }
}

fn non_negative_amount(value: &Decimal, _context: &()) -> garde::Result {
    if value.is_sign_negative() {
        return Err(garde::Error::new("amount cannot be negative"));
    }
    Ok(())
}

/// Validation failures for one CSV data row.
///
/// `row` is the 1-based line number in the uploaded file; the header row
/// counts as row 1, so data rows start at 2. Never mutated after the row's
/// processing completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based line number in the uploaded file.
    pub row: usize,
    /// Human-readable issues, in the order they were detected.
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(AssetStatus::parse("active"), Some(AssetStatus::Active));
        assert_eq!(AssetStatus::parse(" SOLD "), Some(AssetStatus::Sold));
        assert_eq!(AssetStatus::parse("broken"), None);
        assert_eq!(AssetStatus::parse(""), None);
    }

    #[test]
    fn test_asset_type_parse() {
        assert_eq!(AssetType::parse("Group"), Some(AssetType::Group));
        assert_eq!(AssetType::parse("individual"), Some(AssetType::Individual));
        assert_eq!(AssetType::parse("bundle"), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(AssetStatus::default(), AssetStatus::Active);
        assert_eq!(AssetType::default(), AssetType::Individual);
    }

    #[test]
    fn test_parent_group_uuid() {
        let mut row = test_row();
        assert_eq!(row.parent_group_uuid(), None);

        let id = Uuid::new_v4();
        row.parent_group_id = Some(id.to_string());
        assert_eq!(row.parent_group_uuid(), Some(id));

        row.parent_group_id = Some("not-a-uuid".to_string());
        assert_eq!(row.parent_group_uuid(), None);
    }

    fn test_row() -> ParsedAssetRow {
        ParsedAssetRow {
            name: "Laptop".to_string(),
            description: None,
            category: None,
            purchase_date: None,
            purchase_cost: Decimal::ZERO,
            current_value: Decimal::ZERO,
            status: AssetStatus::default(),
            location: None,
            serial_number: None,
            asset_type: AssetType::default(),
            quantity: 1,
            parent_group_id: None,
            image_url: None,
        }
    }
}
