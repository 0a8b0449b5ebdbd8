//! Postgres enum types shared across entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription tier of an organization.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "subscription_tier")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    /// Free tier, the most restrictive.
    #[sea_orm(string_value = "free")]
    Free,
    /// Starter tier.
    #[sea_orm(string_value = "starter")]
    Starter,
    /// Professional tier.
    #[sea_orm(string_value = "professional")]
    Professional,
    /// Enterprise tier; unlimited assets.
    #[sea_orm(string_value = "enterprise")]
    Enterprise,
}

/// Subscription lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "subscription_status")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// In trial period.
    #[sea_orm(string_value = "trialing")]
    Trialing,
    /// Paid and active.
    #[sea_orm(string_value = "active")]
    Active,
    /// Payment overdue.
    #[sea_orm(string_value = "past_due")]
    PastDue,
    /// Subscription canceled.
    #[sea_orm(string_value = "canceled")]
    Canceled,
}

/// Role of a user within an organization.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Organization owner.
    #[sea_orm(string_value = "owner")]
    Owner,
    /// Administrator.
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Regular member.
    #[sea_orm(string_value = "member")]
    Member,
    /// Read-only viewer.
    #[sea_orm(string_value = "viewer")]
    Viewer,
}

/// Asset lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "asset_status")]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// Asset is in service.
    #[sea_orm(string_value = "active")]
    Active,
    /// Asset is undergoing maintenance.
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    /// Asset has been retired.
    #[sea_orm(string_value = "retired")]
    Retired,
    /// Asset has been sold.
    #[sea_orm(string_value = "sold")]
    Sold,
}

/// Whether an asset row is a single item or a counted group.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "asset_type")]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// A single tracked item.
    #[sea_orm(string_value = "individual")]
    Individual,
    /// A counted group of identical items.
    #[sea_orm(string_value = "group")]
    Group,
}

impl From<invenza_core::import::AssetStatus> for AssetStatus {
    fn from(status: invenza_core::import::AssetStatus) -> Self {
        match status {
            invenza_core::import::AssetStatus::Active => Self::Active,
            invenza_core::import::AssetStatus::Maintenance => Self::Maintenance,
            invenza_core::import::AssetStatus::Retired => Self::Retired,
            invenza_core::import::AssetStatus::Sold => Self::Sold,
        }
    }
}

impl From<invenza_core::import::AssetType> for AssetType {
    fn from(asset_type: invenza_core::import::AssetType) -> Self {
        match asset_type {
            invenza_core::import::AssetType::Individual => Self::Individual,
            invenza_core::import::AssetType::Group => Self::Group,
        }
    }
}
