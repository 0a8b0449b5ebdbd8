//! Asset repository for database operations.
//!
//! The batch insert is intentionally a single `insert_many`: an import either
//! lands whole or not at all, independent of the per-row validation that
//! happened upstream.

use invenza_core::import::ParsedAssetRow;
use invenza_shared::types::PageRequest;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::assets;

/// Asset repository for CRUD and batch operations.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    db: DatabaseConnection,
}

impl AssetRepository {
    /// Creates a new asset repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the organization's existing assets.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_by_organization(&self, org_id: Uuid) -> Result<u64, DbErr> {
        assets::Entity::find()
            .filter(assets::Column::OrganizationId.eq(org_id))
            .count(&self.db)
            .await
    }

    /// Inserts a batch of validated rows in one statement, stamping
    /// organization and creator on every row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails; no rows are persisted in that
    /// case.
    pub async fn insert_batch(
        &self,
        org_id: Uuid,
        created_by: Uuid,
        rows: &[ParsedAssetRow],
    ) -> Result<usize, DbErr> {
        if rows.is_empty() {
            return Ok(0);
        }

        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
        let models: Vec<assets::ActiveModel> = rows
            .iter()
            .map(|row| Self::to_active_model(org_id, created_by, row, now))
            .collect();

        assets::Entity::insert_many(models).exec(&self.db).await?;

        Ok(rows.len())
    }

    /// Creates a single asset from a validated candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        org_id: Uuid,
        created_by: Uuid,
        row: &ParsedAssetRow,
    ) -> Result<assets::Model, DbErr> {
        let now = chrono::Utc::now().into();
        Self::to_active_model(org_id, created_by, row, now)
            .insert(&self.db)
            .await
    }

    /// Finds an asset by ID within an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(
        &self,
        org_id: Uuid,
        asset_id: Uuid,
    ) -> Result<Option<assets::Model>, DbErr> {
        assets::Entity::find_by_id(asset_id)
            .filter(assets::Column::OrganizationId.eq(org_id))
            .one(&self.db)
            .await
    }

    /// Lists an organization's assets, newest first.
    ///
    /// Returns the page of assets and the total count.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        org_id: Uuid,
        page: &PageRequest,
    ) -> Result<(Vec<assets::Model>, u64), DbErr> {
        let paginator = assets::Entity::find()
            .filter(assets::Column::OrganizationId.eq(org_id))
            .order_by_desc(assets::Column::CreatedAt)
            .paginate(&self.db, page.limit().max(1));

        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(u64::from(page.page.saturating_sub(1)))
            .await?;

        Ok((items, total))
    }

    /// Deletes an asset within an organization. Returns whether a row was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, org_id: Uuid, asset_id: Uuid) -> Result<bool, DbErr> {
        let result = assets::Entity::delete_many()
            .filter(assets::Column::Id.eq(asset_id))
            .filter(assets::Column::OrganizationId.eq(org_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn to_active_model(
        org_id: Uuid,
        created_by: Uuid,
        row: &ParsedAssetRow,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> assets::ActiveModel {
        assets::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(org_id),
            name: Set(row.name.clone()),
            description: Set(row.description.clone()),
            category: Set(row.category.clone()),
            status: Set(row.status.into()),
            location: Set(row.location.clone()),
            serial_number: Set(row.serial_number.clone()),
            purchase_date: Set(row.purchase_date),
            purchase_cost: Set(row.purchase_cost),
            current_value: Set(row.current_value),
            asset_type: Set(row.asset_type.into()),
            quantity: Set(row.quantity),
            parent_group_id: Set(row.parent_group_uuid()),
            image_url: Set(row.image_url.clone()),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
