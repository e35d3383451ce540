use std::sync::Arc;
use std::time::Instant;

use models::customer;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{parse_customer_id, Customer};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Customer business service independent of web framework.
///
/// Works with any repository, including `dyn CustomerRepository`, so the HTTP
/// layer can swap the database adapter for the in-memory mock.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All customers, in no particular order.
    pub async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        let started = Instant::now();
        let res = self.repo.find_all().await.map(|rows| rows.into_iter().map(Customer::from).collect());
        observe("list", started, res)
    }

    /// Fetch one customer by its hyphenated UUID.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, repository::mock::MockCustomerRepository};
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(MockCustomerRepository::seeded()));
    /// let c = tokio_test::block_on(svc.get_by_id("054b145c-ddbc-4136-a2bd-7bf45ed1bef7")).unwrap();
    /// assert_eq!(c.first_name, "Cally");
    /// assert!(tokio_test::block_on(svc.get_by_id("38124691-9643-4f10")).is_err());
    /// ```
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Customer, ServiceError> {
        let started = Instant::now();
        let res = self.fetch(id).await;
        observe("get", started, res)
    }

    async fn fetch(&self, id: &str) -> Result<Customer, ServiceError> {
        let id = parse_customer_id(id)?;
        let found = self.repo.find_by_id(id).await?;
        found.map(Customer::from).ok_or_else(|| ServiceError::not_found("customer"))
    }

    /// Look up a customer by exact email; a miss is `Ok(None)`.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(self.repo.find_by_email(email).await?.map(Customer::from))
    }

    /// Create a customer with a freshly generated id; a `customerId` in the
    /// input is ignored.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{Customer, CustomerService, repository::mock::MockCustomerRepository};
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(MockCustomerRepository::default()));
    /// let input = Customer {
    ///     first_name: "John".into(),
    ///     last_name: "Doe".into(),
    ///     email_address: "john.doe@example.com".into(),
    ///     ..Customer::default()
    /// };
    /// let created = tokio_test::block_on(svc.add(input.clone())).unwrap();
    /// assert_eq!(created.customer_id.len(), 36);
    /// assert!(tokio_test::block_on(svc.add(input)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email_address))]
    pub async fn add(&self, input: Customer) -> Result<Customer, ServiceError> {
        let started = Instant::now();
        let res = self.create(input).await;
        observe("add", started, res)
    }

    async fn create(&self, input: Customer) -> Result<Customer, ServiceError> {
        if input.has_id() {
            debug!(supplied_id = %input.customer_id, "ignoring client-supplied customerId");
        }
        // ids are always assigned here, whatever the client sent
        let model = input.into_model(Uuid::new_v4());
        customer::validate(&model)?;

        if let Some(existing) = self.repo.find_by_email(&model.email_address).await? {
            debug!(existing_id = %existing.id, "email already registered");
            return Err(ServiceError::Conflict("emailAddress already exists".into()));
        }

        let saved = self.repo.save(model).await?;
        info!(customer_id = %saved.id, "customer_created");
        Ok(saved.into())
    }

    /// Replace every mutable field of an existing customer.
    ///
    /// The id never changes, the record must already exist, and the email may
    /// not belong to a different customer.
    #[instrument(skip(self, input), fields(customer_id = %input.customer_id))]
    pub async fn update(&self, input: Customer) -> Result<Customer, ServiceError> {
        let started = Instant::now();
        let res = self.replace(input).await;
        observe("update", started, res)
    }

    async fn replace(&self, input: Customer) -> Result<Customer, ServiceError> {
        let id = parse_customer_id(&input.customer_id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("customer"));
        }
        let model = input.into_model(id);
        customer::validate(&model)?;

        if let Some(owner) = self.repo.find_by_email(&model.email_address).await? {
            if owner.id != id {
                debug!(owner_id = %owner.id, "email belongs to another customer");
                return Err(ServiceError::Conflict("emailAddress already exists".into()));
            }
        }

        let saved = self.repo.save(model).await?;
        info!(customer_id = %saved.id, "customer_updated");
        Ok(saved.into())
    }

    /// Remove a customer; deleting an unknown id is not an error.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let started = Instant::now();
        let res = self.remove(id).await;
        observe("delete", started, res)
    }

    async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_customer_id(id)?;
        let removed = self.repo.delete_by_id(id).await?;
        info!(customer_id = %id, removed, "customer_deleted");
        Ok(())
    }
}

/// Record metrics for a finished operation and pass the result through.
fn observe<T>(operation: &str, started: Instant, res: Result<T, ServiceError>) -> Result<T, ServiceError> {
    let outcome = match &res {
        Ok(_) => "ok",
        Err(ServiceError::Db(msg)) => {
            warn!(operation, error = %msg, "customer operation failed");
            "error"
        }
        Err(e) => e.outcome(),
    };
    common::metrics::observe(operation, outcome, started.elapsed().as_secs_f64());
    res
}
