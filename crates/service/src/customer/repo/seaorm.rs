use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use uuid::Uuid;

use models::customer;

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(customer::Entity::find().all(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::find_by_email(&self.db, email).await?)
    }

    async fn save(&self, model: customer::Model) -> Result<customer::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let exists = customer::Entity::find_by_id(model.id).one(&txn).await?.is_some();
        let saved = if exists {
            customer::replace(&txn, model).await?
        } else {
            customer::insert(&txn, model).await?
        };
        txn.commit().await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(customer::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::repository::mock::seed_customers;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn repo(db: DatabaseConnection) -> SeaOrmCustomerRepository {
        SeaOrmCustomerRepository { db }
    }

    #[tokio::test]
    async fn find_all_maps_rows() -> Result<(), anyhow::Error> {
        let rows = seed_customers();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();
        let found = repo(db).find_all().await?;
        assert_eq!(found, rows);
        Ok(())
    }

    #[tokio::test]
    async fn save_inserts_unknown_id() -> Result<(), anyhow::Error> {
        let row = seed_customers().remove(0);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // lookup by id: nothing
            .append_query_results([Vec::<customer::Model>::new()])
            // INSERT ... RETURNING
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let saved = repo(db).save(row.clone()).await?;
        assert_eq!(saved, row);
        Ok(())
    }

    #[tokio::test]
    async fn save_updates_known_id() -> Result<(), anyhow::Error> {
        let before = seed_customers().remove(0);
        let mut after = before.clone();
        after.address = "560 Lakewood Park, Bismarck, ND 58505".into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![before.clone()]])
            .append_query_results([vec![after.clone()]])
            .into_connection();
        let saved = repo(db).save(after.clone()).await?;
        assert_eq!(saved.address, after.address);
        assert_eq!(saved.id, before.id);
        Ok(())
    }

    #[tokio::test]
    async fn delete_miss_is_not_an_error() -> Result<(), anyhow::Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult { last_insert_id: 0, rows_affected: 0 }])
            .into_connection();
        assert!(!repo(db).delete_by_id(Uuid::new_v4()).await?);
        Ok(())
    }

    #[tokio::test]
    async fn query_failures_surface_as_db_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let err = repo(db).find_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(ref m) if m.contains("connection reset")));
    }

    #[tokio::test]
    async fn crud_against_postgres() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = crate::test_support::get_db().await?;
        let repo = repo(db);

        let row = customer::Model {
            id: Uuid::new_v4(),
            first_name: "Test".into(),
            last_name: "Repo".into(),
            email_address: format!("repo_{}@test.com", Uuid::new_v4()),
            phone_number: "123-456-7890".into(),
            address: "123 Test St, Test City, TS 12345".into(),
        };
        let created = repo.save(row.clone()).await?;
        assert_eq!(created, row);

        // another id with the same email trips the unique index
        let mut dup = row.clone();
        dup.id = Uuid::new_v4();
        assert!(matches!(repo.save(dup).await, Err(ServiceError::Conflict(_))));

        let mut changed = row.clone();
        changed.last_name = "Renamed".into();
        let updated = repo.save(changed).await?;
        assert_eq!(updated.last_name, "Renamed");
        assert_eq!(repo.find_by_email(&row.email_address).await?.map(|m| m.id), Some(row.id));

        assert!(repo.delete_by_id(row.id).await?);
        assert!(repo.find_by_id(row.id).await?.is_none());
        Ok(())
    }
}
