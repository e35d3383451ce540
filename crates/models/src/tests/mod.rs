
/// CRUD round trips against a real Postgres (needs DATABASE_URL)
pub mod crud_tests;
