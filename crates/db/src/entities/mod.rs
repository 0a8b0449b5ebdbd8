//! `SeaORM` entity definitions.

pub mod assets;
pub mod organization_users;
pub mod organizations;
pub mod sea_orm_active_enums;
pub mod tier_limits;
pub mod users;
