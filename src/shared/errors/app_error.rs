use super::error_code::ErrorCode;
use diesel::result::DatabaseErrorKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AppError {
    #[error("{message}")]
    NotFound { code: ErrorCode, message: String },

    #[error("{message}")]
    BadRequest { code: ErrorCode, message: String },

    #[error("{message}")]
    Conflict { code: ErrorCode, message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Database error: {message}")]
    DatabaseError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl AppError {
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn conflict(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::Conflict {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::bad_request(ErrorCode::ValidationError, message)
    }

    pub fn integrity_violation(message: impl Into<String>) -> Self {
        Self::conflict(ErrorCode::DataIntegrityViolation, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError {
            message: message.into(),
        }
    }

    /// Machine-readable code exposed on the wire.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::Conflict { code, .. } => *code,
            AppError::Unauthorized { .. } => ErrorCode::AuthenticationFailed,
            AppError::Forbidden { .. } => ErrorCode::AccessDenied,
            AppError::DatabaseError { .. } | AppError::InternalError { .. } => {
                ErrorCode::GenericError
            }
        }
    }

    /// HTTP-style status category.
    pub fn status(&self) -> u16 {
        match self {
            AppError::BadRequest { .. } => 400,
            AppError::Unauthorized { .. } => 401,
            AppError::Forbidden { .. } => 403,
            AppError::NotFound { .. } => 404,
            AppError::Conflict { .. } => 409,
            AppError::DatabaseError { .. } | AppError::InternalError { .. } => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self.status() {
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            409 => "Conflict",
            _ => "Internal Server Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::NotFound { message, .. }
            | AppError::BadRequest { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message }
            | AppError::DatabaseError { message }
            | AppError::InternalError { message } => message.clone(),
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => AppError::integrity_violation(info.message().to_string()),
            _ => AppError::DatabaseError {
                message: err.to_string(),
            },
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError {
            message: format!("Database pool error: {}", err),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::internal(format!("Blocking task failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("Serialization error: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
