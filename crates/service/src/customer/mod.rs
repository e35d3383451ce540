//! Customer module: three-layer architecture (domain, repository, service).
//!
//! The service owns the business rules (id format, required fields, email
//! uniqueness); repositories only store and fetch rows.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Customer;
pub use repository::CustomerRepository;
pub use service::CustomerService;
