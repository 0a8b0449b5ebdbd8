//! Column normalization for CSV imports.
//!
//! Maps arbitrary header spellings onto the fixed internal column set.
//! Recognition is case- and punctuation-insensitive: `"Serial Number"`,
//! `serial-number`, and `serial` all resolve to the same column.

/// Canonical columns an asset import row can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetColumn {
    /// Asset name (required).
    Name,
    /// Free-text description.
    Description,
    /// Category label.
    Category,
    /// Lifecycle status.
    Status,
    /// Physical location.
    Location,
    /// Manufacturer serial number.
    SerialNumber,
    /// Acquisition date.
    PurchaseDate,
    /// Acquisition cost (required).
    PurchaseCost,
    /// Current book value.
    CurrentValue,
    /// Individual asset or asset group.
    AssetType,
    /// Unit count for group assets.
    Quantity,
    /// Parent group reference.
    ParentGroupId,
}

impl AssetColumn {
    /// Returns the canonical field name for this column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Category => "category",
            Self::Status => "status",
            Self::Location => "location",
            Self::SerialNumber => "serial_number",
            Self::PurchaseDate => "purchase_date",
            Self::PurchaseCost => "purchase_cost",
            Self::CurrentValue => "current_value",
            Self::AssetType => "asset_type",
            Self::Quantity => "quantity",
            Self::ParentGroupId => "parent_group_id",
        }
    }
}

/// Normalizes a raw CSV header into lookup form.
///
/// Lower-cases the header, collapses every run of non-alphanumeric characters
/// into a single underscore, and strips leading/trailing underscores. Pure and
/// idempotent: normalizing twice yields the same key.
#[must_use]
pub fn normalize_key(header: &str) -> String {
    let mut key = String::with_capacity(header.len());
    let mut pending_separator = false;

    for ch in header.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    key
}

/// Resolves a raw CSV header to its canonical column via the alias table.
///
/// Unmapped headers return `None` and are dropped by the caller without error.
#[must_use]
pub fn resolve_column(header: &str) -> Option<AssetColumn> {
    let column = match normalize_key(header).as_str() {
        "name" | "asset_name" => AssetColumn::Name,
        "description" | "details" => AssetColumn::Description,
        "category" => AssetColumn::Category,
        "status" | "state" => AssetColumn::Status,
        "location" => AssetColumn::Location,
        "serial_number" | "serial" => AssetColumn::SerialNumber,
        "purchase_date" | "acquired_date" | "acquisition_date" => AssetColumn::PurchaseDate,
        "purchase_cost" | "purchase_price" | "purchase_value" => AssetColumn::PurchaseCost,
        "current_value" | "value" => AssetColumn::CurrentValue,
        "asset_type" | "type" => AssetColumn::AssetType,
        "quantity" | "total_items" => AssetColumn::Quantity,
        "parent_group_id" | "group_id" => AssetColumn::ParentGroupId,
        _ => return None,
    };

    Some(column)
}
