//! `SeaORM` Entity for the tier_limits table.
//!
//! One row per subscription tier. NULL limits mean unlimited. Only
//! `max_assets` is enforced by this service; the sibling columns are billed
//! against by the product's other modules.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::SubscriptionTier;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tier_limits")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tier: SubscriptionTier,
    pub max_assets: Option<i32>,
    pub max_users: Option<i32>,
    pub max_invoices_per_month: Option<i32>,
    pub max_quotations_per_month: Option<i32>,
    pub max_reservations_per_month: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
