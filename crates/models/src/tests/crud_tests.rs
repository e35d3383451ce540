use crate::db::{connect_with_config, DatabaseConfig};
use crate::{customer, errors::ModelError};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut cfg = DatabaseConfig::from_env();
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn fresh(tag: &str) -> customer::Model {
    customer::Model {
        id: Uuid::new_v4(),
        first_name: "Test".into(),
        last_name: tag.into(),
        email_address: format!("{tag}_{}@test.com", Uuid::new_v4()),
        phone_number: "123-456-7890".into(),
        address: "123 Test St, Test City, TS 12345".into(),
    }
}

/// Test customer CRUD operations
#[tokio::test]
async fn test_customer_crud() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    // Create
    let created = customer::insert(&db, fresh("crud")).await?;

    // Read
    let found = customer::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));
    let by_email = customer::find_by_email(&db, &created.email_address).await?;
    assert_eq!(by_email.map(|c| c.id), Some(created.id));

    // Update
    let mut changed = created.clone();
    changed.phone_number = "(901) 166-8356".into();
    let updated = customer::replace(&db, changed).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.phone_number, "(901) 166-8356");

    // Delete
    assert!(customer::delete(&db, created.id).await?);
    assert!(!customer::delete(&db, created.id).await?);
    assert!(customer::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// The unique index rejects a second row with the same email
#[tokio::test]
async fn test_duplicate_email_is_rejected_by_index() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let first = customer::insert(&db, fresh("dup")).await?;
    let mut second = fresh("dup");
    second.email_address = first.email_address.clone();
    let err = customer::insert(&db, second).await.unwrap_err();
    assert!(matches!(err, ModelError::Duplicate(_)), "unexpected error: {err:?}");

    customer::delete(&db, first.id).await?;
    Ok(())
}

/// Seed migration loads the demo customers
#[tokio::test]
async fn test_seed_rows_present() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let cally = customer::find_by_email(&db, "penatibus.et@lectusa.com").await?;
    let cally = cally.expect("seeded customer");
    assert_eq!(cally.id.to_string(), "054b145c-ddbc-4136-a2bd-7bf45ed1bef7");
    assert_eq!(cally.first_name, "Cally");
    assert_eq!(cally.address, "556 Lakewood Park, Bismarck, ND 58505");
    Ok(())
}
