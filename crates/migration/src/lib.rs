//! Migrator registering the customer schema in dependency order.
//! Seed data is applied after the unique index so duplicates are rejected.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_customer;
mod m20240101_000002_add_indexes;
mod m20240101_000003_seed_customers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_customer::Migration),
            Box::new(m20240101_000002_add_indexes::Migration),
            Box::new(m20240101_000003_seed_customers::Migration),
        ]
    }
}
