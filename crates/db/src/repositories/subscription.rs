//! Subscription and tier management repository.
//!
//! Handles tier limits for multi-tenant quota enforcement.

use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::warn;
use uuid::Uuid;

use crate::entities::{organizations, sea_orm_active_enums::SubscriptionTier, tier_limits};

/// Fallback ceiling when tier configuration cannot be resolved. Matches the
/// seeded free-tier limit: quota enforcement degrades to the most restrictive
/// plan rather than failing open.
const FREE_TIER_MAX_ASSETS: i64 = 10;

/// Repository for subscription and tier operations.
pub struct SubscriptionRepository;

impl SubscriptionRepository {
    /// Get tier limits for a specific tier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_tier_limits(
        db: &DatabaseConnection,
        tier: SubscriptionTier,
    ) -> Result<Option<tier_limits::Model>, sea_orm::DbErr> {
        tier_limits::Entity::find_by_id(tier).one(db).await
    }

    /// Resolves the organization's asset ceiling. `None` means unlimited.
    ///
    /// Lookup failures fall back to the free tier's ceiling instead of
    /// erroring, so a misconfigured tier_limits table can never unlock
    /// unlimited imports.
    pub async fn asset_ceiling(db: &DatabaseConnection, organization_id: Uuid) -> Option<i64> {
        let tier = match organizations::Entity::find_by_id(organization_id).one(db).await {
            Ok(Some(org)) => org.subscription_tier,
            Ok(None) => {
                warn!(%organization_id, "Organization not found during tier lookup, assuming free tier");
                SubscriptionTier::Free
            }
            Err(e) => {
                warn!(%organization_id, error = %e, "Organization tier lookup failed, assuming free tier");
                SubscriptionTier::Free
            }
        };

        match Self::get_tier_limits(db, tier.clone()).await {
            Ok(Some(limits)) => limits.max_assets.map(i64::from),
            Ok(None) => {
                warn!(?tier, "Tier limits not configured, using free tier ceiling");
                Some(FREE_TIER_MAX_ASSETS)
            }
            Err(e) => {
                warn!(?tier, error = %e, "Tier limits lookup failed, using free tier ceiling");
                Some(FREE_TIER_MAX_ASSETS)
            }
        }
    }
}
