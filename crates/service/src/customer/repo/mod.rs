pub mod seaorm;

pub use seaorm::SeaOrmCustomerRepository;
