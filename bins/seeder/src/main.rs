//! Database seeder for Invenza development and testing.
//!
//! Seeds a test user, organization, and a handful of demo assets for local
//! development.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use invenza_core::auth::hash_password;
use invenza_core::import::parse_csv;
use invenza_db::AssetRepository;
use invenza_db::entities::{
    organization_users, organizations,
    sea_orm_active_enums::{SubscriptionStatus, SubscriptionTier, UserRole},
    users,
};

/// Test organization ID (consistent for all seeds)
const TEST_ORG_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Test user ID (consistent for all seeds)
const TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000002";

/// Demo assets inserted through the same pipeline the import endpoint uses.
const DEMO_ASSETS_CSV: &[u8] = b"name,category,status,purchase_date,purchase_cost,current_value,type,quantity
MacBook Pro 14,electronics,active,2024-01-15,2400,1900,individual,
Standing Desk,furniture,active,15/02/2024,650,600,individual,
Office Chairs,furniture,active,2024-02-15,180,150,group,24
Label Printer,electronics,maintenance,2023-11-02,320,200,individual,
";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = invenza_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding test user...");
    seed_test_user(&db).await;

    println!("Seeding test organization...");
    seed_test_organization(&db).await;

    println!("Seeding demo assets...");
    seed_demo_assets(&db).await;

    println!("Seeding complete!");
}

fn test_org_id() -> Uuid {
    Uuid::parse_str(TEST_ORG_ID).unwrap()
}

fn test_user_id() -> Uuid {
    Uuid::parse_str(TEST_USER_ID).unwrap()
}

/// Seeds a test user for development. Password: `password123`.
async fn seed_test_user(db: &DatabaseConnection) {
    if users::Entity::find_by_id(test_user_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Test user already exists, skipping...");
        return;
    }

    let now = Utc::now().into();
    let user = users::ActiveModel {
        id: Set(test_user_id()),
        email: Set("test@invenza.dev".to_string()),
        password_hash: Set(hash_password("password123").expect("Failed to hash seed password")),
        full_name: Set("Test User".to_string()),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    user.insert(db).await.expect("Failed to seed test user");
}

/// Seeds a test organization on the starter tier with the test user as owner.
async fn seed_test_organization(db: &DatabaseConnection) {
    if organizations::Entity::find_by_id(test_org_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Test organization already exists, skipping...");
        return;
    }

    let now = Utc::now().into();
    let org = organizations::ActiveModel {
        id: Set(test_org_id()),
        name: Set("Invenza Demo Co".to_string()),
        slug: Set("invenza-demo".to_string()),
        is_active: Set(true),
        subscription_tier: Set(SubscriptionTier::Starter),
        subscription_status: Set(SubscriptionStatus::Trialing),
        trial_ends_at: Set(Some((Utc::now() + Duration::days(14)).into())),
        created_at: Set(now),
        updated_at: Set(now),
    };
    org.insert(db)
        .await
        .expect("Failed to seed test organization");

    let membership = organization_users::ActiveModel {
        user_id: Set(test_user_id()),
        organization_id: Set(test_org_id()),
        role: Set(UserRole::Owner),
        created_at: Set(now),
        updated_at: Set(now),
    };
    membership
        .insert(db)
        .await
        .expect("Failed to seed organization membership");
}

/// Seeds demo assets through the import pipeline.
async fn seed_demo_assets(db: &DatabaseConnection) {
    let repo = AssetRepository::new(db.clone());

    let existing = repo
        .count_by_organization(test_org_id())
        .await
        .expect("Failed to count assets");
    if existing > 0 {
        println!("  Demo assets already exist, skipping...");
        return;
    }

    let report = parse_csv(DEMO_ASSETS_CSV).expect("Demo CSV should parse");
    assert!(
        report.errors.is_empty(),
        "Demo CSV rows should all validate: {:?}",
        report.errors
    );

    let inserted = repo
        .insert_batch(test_org_id(), test_user_id(), &report.rows)
        .await
        .expect("Failed to seed demo assets");
    println!("  Inserted {inserted} demo assets");
}
