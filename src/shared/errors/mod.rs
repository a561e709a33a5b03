pub mod api_error;
pub mod app_error;
pub mod error_code;

pub use api_error::ApiError;
pub use app_error::{AppError, AppResult};
pub use error_code::ErrorCode;
