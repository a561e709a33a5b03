/// Shared infrastructure concerns
///
/// Connection pooling, the transaction boundary and the two store implementations
/// (Postgres and in-memory) used by every bounded context.
pub mod database;
pub mod memory;
pub mod postgres;
pub mod unit_of_work;

// Re-exports for convenience
pub use database::{Database, DatabaseConfig};
pub use memory::MemoryUnitOfWork;
pub use postgres::PgUnitOfWork;
pub use unit_of_work::{AcademicRepositories, UnitOfWork};
