//! Repository abstractions for data access.

pub mod asset;
pub mod organization;
pub mod subscription;
pub mod user;

pub use asset::AssetRepository;
pub use organization::OrganizationRepository;
pub use subscription::SubscriptionRepository;
pub use user::UserRepository;
