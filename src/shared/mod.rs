// Shared kernel used by every bounded context

pub mod domain; // Person attributes, revision short-circuit
pub mod errors; // AppError, ErrorCode, ApiError wire shape
pub mod infrastructure; // Pool, unit of work, Postgres and in-memory stores
pub mod utils; // Logging, validation

// Re-exports for convenience
pub use errors::{ApiError, AppError, AppResult, ErrorCode};
pub use infrastructure::{Database, MemoryUnitOfWork, PgUnitOfWork, UnitOfWork};
