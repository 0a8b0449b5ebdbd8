//! Initial database migration.
//!
//! Creates all core tables, enums, triggers, and seed data.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CORE TABLES
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(ORGANIZATIONS_SQL).await?;
        db.execute_unprepared(ORGANIZATION_USERS_SQL).await?;

        // ============================================================
        // PART 3: ASSETS
        // ============================================================
        db.execute_unprepared(ASSETS_SQL).await?;

        // ============================================================
        // PART 4: SUBSCRIPTION & TIER MANAGEMENT
        // ============================================================
        db.execute_unprepared(TIER_LIMITS_SQL).await?;

        // ============================================================
        // PART 5: TRIGGERS & FUNCTIONS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        // ============================================================
        // PART 6: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_TIER_LIMITS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Subscription tiers
CREATE TYPE subscription_tier AS ENUM (
    'free',
    'starter',
    'professional',
    'enterprise'
);

-- Subscription lifecycle
CREATE TYPE subscription_status AS ENUM (
    'trialing',
    'active',
    'past_due',
    'canceled'
);

-- User roles
CREATE TYPE user_role AS ENUM (
    'owner',
    'admin',
    'member',
    'viewer'
);

-- Asset lifecycle status
CREATE TYPE asset_status AS ENUM (
    'active',
    'maintenance',
    'retired',
    'sold'
);

-- Individual asset vs counted group
CREATE TYPE asset_type AS ENUM (
    'individual',
    'group'
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    full_name TEXT NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const ORGANIZATIONS_SQL: &str = r"
CREATE TABLE organizations (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    subscription_tier subscription_tier NOT NULL DEFAULT 'free',
    subscription_status subscription_status NOT NULL DEFAULT 'trialing',
    trial_ends_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const ORGANIZATION_USERS_SQL: &str = r"
CREATE TABLE organization_users (
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
    role user_role NOT NULL DEFAULT 'member',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (user_id, organization_id)
);

CREATE INDEX idx_organization_users_org ON organization_users(organization_id);
";

const ASSETS_SQL: &str = r"
CREATE TABLE assets (
    id UUID PRIMARY KEY,
    organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
    name TEXT NOT NULL CHECK (char_length(name) >= 2),
    description TEXT,
    category TEXT,
    status asset_status NOT NULL DEFAULT 'active',
    location TEXT,
    serial_number TEXT,
    purchase_date DATE,
    purchase_cost NUMERIC(15, 2) NOT NULL CHECK (purchase_cost >= 0),
    current_value NUMERIC(15, 2) NOT NULL CHECK (current_value >= 0),
    asset_type asset_type NOT NULL DEFAULT 'individual',
    quantity BIGINT NOT NULL DEFAULT 1 CHECK (quantity >= 1),
    parent_group_id UUID,
    image_url TEXT,
    created_by UUID NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_assets_organization ON assets(organization_id);
CREATE INDEX idx_assets_org_created ON assets(organization_id, created_at DESC);
";

const TIER_LIMITS_SQL: &str = r"
-- NULL limit means unlimited
CREATE TABLE tier_limits (
    tier subscription_tier PRIMARY KEY,
    max_assets INTEGER,
    max_users INTEGER,
    max_invoices_per_month INTEGER,
    max_quotations_per_month INTEGER,
    max_reservations_per_month INTEGER
);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = NOW();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_users_updated_at
    BEFORE UPDATE ON users
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_organizations_updated_at
    BEFORE UPDATE ON organizations
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_organization_users_updated_at
    BEFORE UPDATE ON organization_users
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_assets_updated_at
    BEFORE UPDATE ON assets
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const SEED_TIER_LIMITS_SQL: &str = r"
INSERT INTO tier_limits (tier, max_assets, max_users, max_invoices_per_month, max_quotations_per_month, max_reservations_per_month) VALUES
    ('free',         10,   2,    20,   20,   20),
    ('starter',      100,  10,   200,  200,  200),
    ('professional', 1000, 50,   2000, 2000, 2000),
    ('enterprise',   NULL, NULL, NULL, NULL, NULL);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS tier_limits;
DROP TABLE IF EXISTS assets;
DROP TABLE IF EXISTS organization_users;
DROP TABLE IF EXISTS organizations;
DROP TABLE IF EXISTS users;
DROP FUNCTION IF EXISTS set_updated_at();
DROP TYPE IF EXISTS asset_type;
DROP TYPE IF EXISTS asset_status;
DROP TYPE IF EXISTS user_role;
DROP TYPE IF EXISTS subscription_status;
DROP TYPE IF EXISTS subscription_tier;
";
