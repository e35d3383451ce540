use async_trait::async_trait;
use models::customer;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Repository abstraction for customer persistence.
///
/// `save` inserts when the id is unknown and replaces the row otherwise. A
/// second row with an existing email must be refused with `Conflict`.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<customer::Model>, ServiceError>;
    async fn save(&self, model: customer::Model) -> Result<customer::Model, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests, benches and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    pub struct MockCustomerRepository {
        rows: Mutex<HashMap<Uuid, customer::Model>>, // key: customer id
    }

    impl MockCustomerRepository {
        pub fn with_customers(rows: impl IntoIterator<Item = customer::Model>) -> Self {
            let rows = rows.into_iter().map(|m| (m.id, m)).collect();
            Self { rows: Mutex::new(rows) }
        }

        /// Repository pre-loaded with the demo customers of the seed migration.
        pub fn seeded() -> Self {
            Self::with_customers(seed_customers())
        }

        pub fn len(&self) -> usize {
            self.rows().len()
        }

        pub fn is_empty(&self) -> bool {
            self.rows().is_empty()
        }

        fn rows(&self) -> MutexGuard<'_, HashMap<Uuid, customer::Model>> {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
            Ok(self.rows().values().cloned().collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError> {
            Ok(self.rows().get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<customer::Model>, ServiceError> {
            Ok(self.rows().values().find(|m| m.email_address == email).cloned())
        }

        async fn save(&self, model: customer::Model) -> Result<customer::Model, ServiceError> {
            let mut rows = self.rows();
            // same guarantee as the unique index on customer.email_address
            if rows.values().any(|m| m.email_address == model.email_address && m.id != model.id) {
                return Err(ServiceError::Conflict("emailAddress already exists".into()));
            }
            rows.insert(model.id, model.clone());
            Ok(model)
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.rows().remove(&id).is_some())
        }
    }

    /// The five demo customers, identical to the rows of the seed migration.
    pub fn seed_customers() -> Vec<customer::Model> {
        let row = |id: u128, first: &str, last: &str, email: &str, phone: &str, address: &str| customer::Model {
            id: Uuid::from_u128(id),
            first_name: first.into(),
            last_name: last.into(),
            email_address: email.into(),
            phone_number: phone.into(),
            address: address.into(),
        };
        vec![
            row(0x054b145c_ddbc_4136_a2bd_7bf45ed1bef7, "Cally", "Reynolds", "penatibus.et@lectusa.com", "(901) 166-8355", "556 Lakewood Park, Bismarck, ND 58505"),
            row(0x9ac775c3_a1d3_4a0e_a2df_3e4ee8b3a49a, "Sydney", "Bartlett", "nibh@ultricesposuere.edu", "(982) 231-7357", "4829 Badeau Parkway, Chattanooga, TN 37405"),
            row(0xc04ca077_8c40_4437_b77a_41f510f3f185, "Hunter", "Newton", "quam.quis.diam@facilisisfacilisis.org", "(831) 996-1240", "2 Rockefeller Avenue, Waco, TX 76796"),
            row(0x3b6c3ecc_fad7_49db_a14a_f396ed866e50, "Brooke", "Perkins", "sit@vitaealiquetnec.net", "(340) 732-9367", "87 Brentwood Park, Dallas, TX 75358"),
            row(0x38124691_9643_4f10_90a0_d980bca0b27d, "Nolan", "Slater", "sociis.natoque.penatibus@vitae.co.uk", "(540) 487-5928", "99 Demo Junction, Roanoke, VA 24040"),
        ]
    }
}
