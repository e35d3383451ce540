//! Seed the demo customers.
//!
//! Rows match `service::customer::repository::mock::MockCustomerRepository::seeded()`.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_IDS: [&str; 5] = [
    "054b145c-ddbc-4136-a2bd-7bf45ed1bef7",
    "9ac775c3-a1d3-4a0e-a2df-3e4ee8b3a49a",
    "c04ca077-8c40-4437-b77a-41f510f3f185",
    "3b6c3ecc-fad7-49db-a14a-f396ed866e50",
    "38124691-9643-4f10-90a0-d980bca0b27d",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"INSERT INTO customer (id, first_name, last_name, email_address, phone_number, address) VALUES
                ('054b145c-ddbc-4136-a2bd-7bf45ed1bef7', 'Cally', 'Reynolds', 'penatibus.et@lectusa.com', '(901) 166-8355', '556 Lakewood Park, Bismarck, ND 58505'),
                ('9ac775c3-a1d3-4a0e-a2df-3e4ee8b3a49a', 'Sydney', 'Bartlett', 'nibh@ultricesposuere.edu', '(982) 231-7357', '4829 Badeau Parkway, Chattanooga, TN 37405'),
                ('c04ca077-8c40-4437-b77a-41f510f3f185', 'Hunter', 'Newton', 'quam.quis.diam@facilisisfacilisis.org', '(831) 996-1240', '2 Rockefeller Avenue, Waco, TX 76796'),
                ('3b6c3ecc-fad7-49db-a14a-f396ed866e50', 'Brooke', 'Perkins', 'sit@vitaealiquetnec.net', '(340) 732-9367', '87 Brentwood Park, Dallas, TX 75358'),
                ('38124691-9643-4f10-90a0-d980bca0b27d', 'Nolan', 'Slater', 'sociis.natoque.penatibus@vitae.co.uk', '(540) 487-5928', '99 Demo Junction, Roanoke, VA 24040')
            ON CONFLICT DO NOTHING"#,
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids = SEED_IDS.iter().map(|id| format!("'{id}'")).collect::<Vec<_>>().join(", ");
        manager
            .get_connection()
            .execute_unprepared(&format!("DELETE FROM customer WHERE id IN ({ids})"))
            .await?;
        Ok(())
    }
}
