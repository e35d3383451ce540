use std::sync::Arc;

use service::customer::{CustomerRepository, CustomerService};

/// Shared router state: the customer service over whichever repository was wired in.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService<dyn CustomerRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customers: Arc::new(CustomerService::new(repo)) }
    }
}
