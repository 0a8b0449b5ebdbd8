//! Subscription tier quota decisions.
//!
//! Pure decision logic: the database layer supplies the counts and the tier
//! ceiling, this module answers whether an operation fits under it.

/// Result of a quota check.
#[derive(Debug, Clone)]
pub struct QuotaCheck {
    /// Whether the operation is allowed.
    pub allowed: bool,
    /// Current usage count.
    pub current: i64,
    /// Maximum limit (None = unlimited).
    pub limit: Option<i64>,
    /// Human-readable message if the limit would be exceeded.
    pub message: Option<String>,
}

/// Decides whether `incoming` new assets fit under the organization's ceiling.
///
/// An unlimited plan (`limit` = None) always passes. Otherwise the whole
/// batch must fit: `current + incoming <= limit`, all-or-nothing.
#[must_use]
pub fn check_asset_quota(current: i64, incoming: i64, limit: Option<i64>) -> QuotaCheck {
    let Some(max) = limit else {
        return QuotaCheck {
            allowed: true,
            current,
            limit: None,
            message: None,
        };
    };

    let allowed = current.saturating_add(incoming) <= max;
    let message = if allowed {
        None
    } else {
        Some(format!(
            "Asset limit exceeded: {current} of {max} assets in use, \
             and importing {incoming} more would exceed your plan limit"
        ))
    };

    QuotaCheck {
        allowed,
        current,
        limit: Some(max),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_plan_always_allows() {
        let check = check_asset_quota(1_000_000, 1_000_000, None);
        assert!(check.allowed);
        assert_eq!(check.limit, None);
        assert_eq!(check.message, None);
    }

    #[test]
    fn test_batch_fitting_exactly_is_allowed() {
        let check = check_asset_quota(18, 2, Some(20));
        assert!(check.allowed);
        assert_eq!(check.message, None);
    }

    #[test]
    fn test_batch_overshooting_is_denied() {
        let check = check_asset_quota(18, 3, Some(20));
        assert!(!check.allowed);

        let message = check.message.unwrap();
        assert!(message.contains("18"));
        assert!(message.contains("20"));
        assert!(message.contains("3"));
    }

    #[test]
    fn test_zero_incoming_under_full_plan() {
        let check = check_asset_quota(20, 0, Some(20));
        assert!(check.allowed);
    }

    #[test]
    fn test_already_over_limit_denies_any_batch() {
        let check = check_asset_quota(25, 1, Some(20));
        assert!(!check.allowed);
    }

    #[test]
    fn test_overflow_does_not_wrap() {
        // Saturating add: the sum must not wrap negative and slip under the limit.
        let check = check_asset_quota(i64::MAX, 1, Some(20));
        assert!(!check.allowed);
    }
}
