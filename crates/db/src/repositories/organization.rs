//! Organization repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{
    organization_users, organizations,
    sea_orm_active_enums::{SubscriptionStatus, SubscriptionTier, UserRole},
};

/// Organization repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    db: DatabaseConnection,
}

impl OrganizationRepository {
    /// Creates a new organization repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an organization by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<organizations::Model>, DbErr> {
        organizations::Entity::find_by_id(id).one(&self.db).await
    }

    /// Checks if a user is a member of an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn is_member(&self, org_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let count = organization_users::Entity::find()
            .filter(organization_users::Column::OrganizationId.eq(org_id))
            .filter(organization_users::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the user's earliest organization membership, if any.
    ///
    /// Used as the fallback when an access token carries no organization
    /// claim.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn first_membership(
        &self,
        user_id: Uuid,
    ) -> Result<Option<organization_users::Model>, DbErr> {
        organization_users::Entity::find()
            .filter(organization_users::Column::UserId.eq(user_id))
            .order_by_asc(organization_users::Column::CreatedAt)
            .one(&self.db)
            .await
    }

    /// Creates a new organization with the creator as owner.
    ///
    /// New organizations start on the free tier with a 14-day trial.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create_with_owner(
        &self,
        name: &str,
        slug: &str,
        owner_id: Uuid,
    ) -> Result<organizations::Model, DbErr> {
        let txn = self.db.begin().await?;

        let now = chrono::Utc::now().into();
        let org_id = Uuid::new_v4();

        let org = organizations::ActiveModel {
            id: Set(org_id),
            name: Set(name.to_string()),
            slug: Set(slug.to_string()),
            is_active: Set(true),
            subscription_tier: Set(SubscriptionTier::Free),
            subscription_status: Set(SubscriptionStatus::Trialing),
            trial_ends_at: Set(Some((chrono::Utc::now() + chrono::Duration::days(14)).into())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let org = org.insert(&txn).await?;

        let membership = organization_users::ActiveModel {
            user_id: Set(owner_id),
            organization_id: Set(org_id),
            role: Set(UserRole::Owner),
            created_at: Set(now),
            updated_at: Set(now),
        };

        membership.insert(&txn).await?;

        txn.commit().await?;

        Ok(org)
    }
}
